//! Interactive console entry point: reads messages from stdin and prints
//! the agent's replies until EOF or `sair`.

use std::io::{self, BufRead, Write};

use tracing_subscriber::EnvFilter;

use nebula_agent::{Agent, ChatService, ConversationMemory};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let service = ChatService::new(Agent::from_env());
    let mut memory = ConversationMemory::new();

    println!("Nebula Agent — assistente de testes BDD. Digite 'sair' para encerrar.\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let message = line.trim();
        if message.eq_ignore_ascii_case("sair") {
            break;
        }

        let reply = service
            .handle_message("console", "console", message, &mut memory)
            .await;
        println!("{}\n", reply);
    }

    Ok(())
}
