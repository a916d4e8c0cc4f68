//! User-facing message literals.
//!
//! The product ships bilingual: the generate flow speaks English and the
//! status flow speaks Spanish. Both sets are kept here as data so neither
//! language ends up scattered through handler code.

pub struct Messages {
    pub missing_resume: &'static str,
    pub missing_description: &'static str,
    pub invalid_duration: &'static str,
    pub missing_label: &'static str,
    pub missing_script: &'static str,
    pub empty_script: &'static str,
    pub missing_video_id: &'static str,
    /// Unit appended after a two-decimal duration, e.g. "62.50 segundos".
    pub duration_unit: &'static str,
    pub video_completed: &'static str,
    pub video_processing: &'static str,
    pub video_failed: &'static str,
    pub unknown_error: &'static str,
}

pub const EN: Messages = Messages {
    missing_resume: "Please upload your CV and provide the job description.",
    missing_description: "Please provide the job description.",
    invalid_duration: "Video duration must be between 1 and 10 minutes.",
    missing_label: "Please provide a job title before sending the script.",
    missing_script: "No script draft available. Generate a script first.",
    empty_script: "The edited script must not be empty.",
    missing_video_id: "Please enter a video ID to check.",
    duration_unit: "seconds",
    video_completed: "Video completed!",
    video_processing: "The video is being processed...",
    video_failed: "Video processing failed",
    unknown_error: "Unknown error",
};

pub const ES: Messages = Messages {
    missing_resume: "Sube tu CV y proporciona la descripción del puesto.",
    missing_description: "Proporciona la descripción del puesto.",
    invalid_duration: "La duración del video debe estar entre 1 y 10 minutos.",
    missing_label: "Proporciona un título del puesto antes de enviar el guion.",
    missing_script: "No hay ningún guion disponible. Genera un guion primero.",
    empty_script: "El guion editado no puede estar vacío.",
    missing_video_id: "Introduce un ID de video para consultar.",
    duration_unit: "segundos",
    video_completed: "¡Video completado!",
    video_processing: "El video está siendo procesado...",
    video_failed: "Error en el procesamiento del video",
    unknown_error: "Error desconocido",
};

/// Renders a duration in seconds with two-decimal precision, e.g. "62.50 segundos".
pub fn format_duration(messages: &Messages, seconds: f64) -> String {
    format!("{seconds:.2} {}", messages.duration_unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_rendered_with_two_decimals_spanish() {
        assert_eq!(format_duration(&ES, 62.5), "62.50 segundos");
    }

    #[test]
    fn test_duration_rendered_with_two_decimals_english() {
        assert_eq!(format_duration(&EN, 7.0), "7.00 seconds");
    }

    #[test]
    fn test_duration_rounds_to_two_decimals() {
        assert_eq!(format_duration(&ES, 61.999), "62.00 segundos");
    }
}
