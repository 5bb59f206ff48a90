//! Content module
//!
//! Supplies the body of a report. Generation sits behind the
//! `ContentGenerator` trait; today both implementations return fixed data.

use crate::models::ContentPayload;

/// Request kind for the daily status report
pub const DAILY_STATUS: &str = "daily_status";

/// A source of report content
pub trait ContentGenerator {
    /// Produce the payload for a request kind
    fn generate(&self, kind: &str) -> ContentPayload;
}

/// Minimal placeholder content used when AI is disabled
pub struct DefaultContent;

impl ContentGenerator for DefaultContent {
    fn generate(&self, _kind: &str) -> ContentPayload {
        ContentPayload {
            achievements: vec!["Tareas completadas del día".to_string()],
            challenges: vec!["Desafíos identificados".to_string()],
            next_steps: vec!["Próximos pasos planificados".to_string()],
            mood: Some("neutral".to_string()),
            productivity_score: Some(70),
        }
    }
}

/// Sample "AI" content, selected from a fixed table
pub struct SampleAiContent;

impl ContentGenerator for SampleAiContent {
    fn generate(&self, kind: &str) -> ContentPayload {
        match kind {
            DAILY_STATUS => ContentPayload {
                achievements: strings(&[
                    "✅ Completada la revisión de código del proyecto principal",
                    "✅ Implementadas mejoras de rendimiento en el módulo de reportes",
                    "✅ Participación en reunión de planificación semanal",
                ]),
                challenges: strings(&[
                    "⚠️ Pendiente resolución de conflicto en base de datos",
                    "⚠️ Necesidad de optimizar consultas SQL complejas",
                ]),
                next_steps: strings(&[
                    "🎯 Implementar nuevas funcionalidades de dashboard",
                    "🎯 Revisar y actualizar documentación técnica",
                    "🎯 Preparar presentación para cliente",
                ]),
                mood: Some("productivo".to_string()),
                productivity_score: Some(85),
            },
            _ => ContentPayload::default(),
        }
    }
}

/// Select a generator for the AI flag and produce content for `kind`
pub fn provide(kind: &str, ai_enabled: bool) -> ContentPayload {
    generator(ai_enabled).generate(kind)
}

/// Generator backing the given AI flag
pub fn generator(ai_enabled: bool) -> Box<dyn ContentGenerator> {
    if ai_enabled {
        Box::new(SampleAiContent)
    } else {
        Box::new(DefaultContent)
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_returns_minimal_payload() {
        let payload = provide(DAILY_STATUS, false);
        assert_eq!(payload.achievements, vec!["Tareas completadas del día"]);
        assert_eq!(payload.challenges, vec!["Desafíos identificados"]);
        assert_eq!(payload.next_steps, vec!["Próximos pasos planificados"]);
        assert_eq!(payload.mood.as_deref(), Some("neutral"));
        assert_eq!(payload.productivity_score, Some(70));
    }

    #[test]
    fn test_disabled_ignores_kind() {
        assert_eq!(provide("weekly_summary", false), provide(DAILY_STATUS, false));
        assert_eq!(provide("", false), provide(DAILY_STATUS, false));
    }

    #[test]
    fn test_ai_daily_status_payload() {
        let payload = provide(DAILY_STATUS, true);
        assert_eq!(payload.achievements.len(), 3);
        assert_eq!(payload.challenges.len(), 2);
        assert_eq!(payload.next_steps.len(), 3);
        assert_eq!(payload.mood.as_deref(), Some("productivo"));
        assert_eq!(payload.productivity_score, Some(85));
        assert!(payload.achievements[0].starts_with("✅"));
        assert!(payload.challenges.iter().all(|c| c.starts_with("⚠️")));
    }

    #[test]
    fn test_ai_unknown_kind_is_empty() {
        let payload = provide("weekly_summary", true);
        assert!(payload.is_empty());
        assert_eq!(payload, ContentPayload::default());
    }

    #[test]
    fn test_generate_is_deterministic() {
        let generator = generator(true);
        assert_eq!(generator.generate(DAILY_STATUS), generator.generate(DAILY_STATUS));
    }
}
