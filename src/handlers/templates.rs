//! Message templates
//!
//! Texts existing customers already know. Keep the wording byte for byte;
//! the `*bold*` and `_italic_` markers are part of it.

use crate::state::IntakeData;

pub const APPLIANCE_PROMPT: &str = "Ok, vamos iniciar seu pedido de orçamento.\n\n\
    Primeiro, informe qual o eletrodoméstico precisa de conserto?\n\n\
    *Ex: Máquina de Lavar, Ventilador, etc.*\n\n\
    _(Para cancelar, digite *Menu*)_";

pub const MODEL_PROMPT: &str = "✅ Aparelho anotado! Agora, por favor, informe a *marca e o modelo*.\n\n\
    *Exemplo: Brastemp Clean BWG11A*\n\n\
    _(Para cancelar, digite *Menu*)_";

pub const PROBLEM_PROMPT: &str = "✅ Modelo anotado! Para finalizar, por favor, *descreva o problema* que você está enfrentando.\n\n\
    _(Para cancelar, digite *Menu*)_";

pub const BUSINESS_HOURS: &str = "Nosso horário de atendimento é de *Segunda a Sábado, das 07h às 18h*.";

pub const SERVICES_MESSAGE: &str = "Somos especialistas no conserto e manutenção de:\n\n\
    ✅ Máquinas de lavar roupa\n\
    ✅ Tanquinhos (Lavadoras semiautomáticas)\n\
    ✅ Centrífugas de roupa\n\
    ✅ Ventiladores de todos os tipos\n\n\
    Para solicitar um serviço, digite *Menu* e depois a opção *1*.";

pub const FORWARDED_TO_OWNER: &str = "Certo. Sua mensagem será encaminhada para o proprietário. \
    Por favor, aguarde que ele responderá assim que possível aqui mesmo.";

pub const NOT_UNDERSTOOD: &str = "Desculpe, não entendi. 🤔\n\n\
    Digite *Menu* para ver as opções disponíveis.";

/// Main menu greeting the user by name
pub fn render_main_menu(display_name: &str) -> String {
    format!(
        "Olá, {}! 👋 Sou o assistente virtual da *MAQ SERVICE*.\n\n\
         Se você deseja adiantar o assunto, por favor, *digite o número* da opção desejada:\n\n\
         *1* - Solicitar Orçamento/Visita Técnica\n\
         *2* - Consultar Serviços Oferecidos\n\
         *3* - Falar com o Proprietário",
        display_name
    )
}

/// Confirmation sent once all three answers are in
pub fn render_summary(data: &IntakeData) -> String {
    format!(
        "Obrigado pelas informações! Seu pedido foi registrado com sucesso:\n\n\
         *Eletrodoméstico:* {}\n\
         *Marca/Modelo:* {}\n\
         *Problema:* {}\n\n\
         Em breve, um de nossos técnicos entrará em contato.\n\n\
         {}",
        data.appliance.as_deref().unwrap_or_default(),
        data.model.as_deref().unwrap_or_default(),
        data.problem.as_deref().unwrap_or_default(),
        BUSINESS_HOURS
    )
}
