//! Screen Description Mapping
//!
//! Maps the user's message to a canned screen description for analysis.
//! The agent has no real screen capture; this ordered keyword table stands
//! in for it, pairing common flows with representative descriptions. The
//! first matching keyword wins.

/// Ordered keyword → canned description table.
const SCREEN_DESCRIPTIONS: &[(&str, &str)] = &[
    (
        "login",
        "Tela de Login com campos 'Usuário', 'Senha', botão 'Entrar' e link 'Esqueci a Senha'.",
    ),
    (
        "logar",
        "Tela de Login com campos 'Usuário', 'Senha', botão 'Entrar' e link 'Esqueci a Senha'.",
    ),
    (
        "autenticação",
        "Tela de Autenticação com campos 'Email', 'Senha', botão 'Conectar' e opção 'Lembrar-me'.",
    ),
    (
        "cadastro",
        "Tela de Cadastro de Novo Usuário com campos 'Nome', 'Email', 'CPF', 'Senha', 'Confirmar Senha' e botão 'Criar Conta'.",
    ),
    (
        "registrar",
        "Tela de Cadastro de Novo Usuário com campos 'Nome', 'Email', 'CPF', 'Senha', 'Confirmar Senha' e botão 'Criar Conta'.",
    ),
    (
        "checkout",
        "Tela de Checkout com formulário de endereço, seleção de método de pagamento (Cartão, Pix) e botão 'Finalizar Compra'.",
    ),
    (
        "pagamento",
        "Tela de Checkout com formulário de endereço, seleção de método de pagamento (Cartão, Pix) e botão 'Finalizar Compra'.",
    ),
    (
        "dashboard",
        "Tela de Dashboard com gráficos, tabelas de dados, botões de ação e menu lateral de navegação.",
    ),
    (
        "listagem",
        "Tela de Listagem com tabela de itens, filtros, busca, paginação e botões de ação (editar, deletar).",
    ),
    (
        "perfil",
        "Tela de Perfil de Usuário com campos editáveis, foto, informações pessoais e botão 'Salvar'.",
    ),
    (
        "configurações",
        "Tela de Configurações com abas, toggles, dropdowns e botão 'Salvar Alterações'.",
    ),
];

/// Generic description used when no keyword matches.
const GENERIC_DESCRIPTION: &str = "Tela Genérica com formulário e botão de ação.";

/// Pick the screen description matching the message.
pub fn screen_description_for(message: &str) -> &'static str {
    let lower = message.to_lowercase();
    SCREEN_DESCRIPTIONS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, description)| *description)
        .unwrap_or(GENERIC_DESCRIPTION)
}
