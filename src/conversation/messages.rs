//! User-facing texts.

use crate::listing::{DateInputError, KeywordTally};

pub const WELCOME: &str = "👋 ¡Bienvenido al bot de búsqueda de dominios!\n\n\
Este bot te permite consultar dominios registrados en una fecha específica o dentro de un rango de fechas. 🌐\n\n\
Por favor, ingresa una fecha o un rango de fechas en el siguiente formato:\n\n\
📅 Fecha individual: AAAAMMDD\n\
📅 Rango de fechas: AAAAMMDD-AAAAMMDD\n\n\
Ejemplos:\n\
20240115 → Dominios registrados ese día\n\
20240101-20240131 → Dominios registrados durante enero 2024\n\n\
⌛ Esperando tu entrada...";

pub const INVALID_DATE: &str = "Formato inválido. Intenta otra vez.";
pub const ASK_MODE: &str = "¿Quieres 'TODOS' los dominios o usar 'PALABRAS' clave?";
pub const INVALID_MODE: &str = "Responde con 'TODOS' o 'PALABRAS'.";
pub const ASK_KEYWORDS: &str = "Dime las palabras clave separadas por comas.";
pub const NO_KEYWORDS: &str = "No encontré palabras clave. Escríbelas separadas por comas.";
pub const SEARCHING_ALL: &str = "Buscando todos los dominios. Espera un momento...";
pub const NO_RESULTS: &str = "No se encontraron dominios con datos WHOIS para esa búsqueda.";
pub const FAILURE: &str = "Ocurrió un error al generar o enviar el archivo. Intenta más tarde.";
pub const TALLY_HEADER: &str = "Resumen de coincidencias:";

pub fn searching_keywords(keywords: &[String]) -> String {
    format!("Buscando dominios con: {}", keywords.join(", "))
}

/// Rejection notice for a date input, with the reason in the user's language.
pub fn invalid_date(error: &DateInputError) -> String {
    let reason = match error {
        DateInputError::Format(_) => "usa AAAAMMDD o AAAAMMDD-AAAAMMDD".to_string(),
        DateInputError::ReversedRange { start, end } => {
            format!("la fecha inicial {start} es posterior a la final {end}")
        }
        DateInputError::RangeTooLong { days, max } => {
            format!("el rango tiene {days} días y el máximo es {max}")
        }
    };
    format!("{INVALID_DATE} ({reason})")
}

/// Keyword summary sent after the report.
pub fn tally_summary(tally: &KeywordTally) -> String {
    format!("{TALLY_HEADER}\n{tally}")
}
