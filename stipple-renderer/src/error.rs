/// Error categories.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Failed to initialize the WebGL context or retrieve DOM elements.
    #[error("Initialization error: {0}")]
    Initialization(String),

    /// Shader compilation, linking, or program creation errors.
    #[error("Shader error: {0}")]
    Shader(String),

    /// WebGL resource creation or lookup errors.
    #[error("Resource error: {0}")]
    Resource(String),

    /// Event listener errors.
    #[error("Event listener error: {0}")]
    Callback(String),
}

impl Error {
    // Helper constructors for common error scenarios

    // Initialization errors
    pub fn window_not_found() -> Self {
        Self::Initialization("Unable to retrieve window".to_string())
    }

    pub fn document_not_found() -> Self {
        Self::Initialization("Unable to retrieve document".to_string())
    }

    pub fn canvas_not_found() -> Self {
        Self::Initialization("Unable to retrieve canvas".to_string())
    }

    pub fn webgl_context_failed() -> Self {
        Self::Initialization("Failed to retrieve WebGL2 rendering context".to_string())
    }

    pub fn canvas_context_failed() -> Self {
        Self::Initialization("Failed to retrieve canvas rendering context".to_string())
    }

    // Shader errors
    pub fn shader_creation_failed(detail: &str) -> Self {
        Self::Shader(format!("Shader creation failed: {detail}"))
    }

    pub fn shader_compile_failed(log: String) -> Self {
        Self::Shader(format!("Shader compilation failed: {log}"))
    }

    pub fn shader_program_creation_failed() -> Self {
        Self::Shader("Shader program creation failed".to_string())
    }

    pub fn shader_link_failed(log: String) -> Self {
        Self::Shader(format!("Shader linking failed: {log}"))
    }

    // Resource errors
    pub fn buffer_creation_failed(buffer_type: &str) -> Self {
        Self::Resource(format!("Failed to create {buffer_type} buffer"))
    }

    pub fn uniform_location_failed(name: &str) -> Self {
        Self::Resource(format!("Failed to get uniform location: {name}"))
    }

    pub fn attrib_location_failed(name: &str) -> Self {
        Self::Resource(format!("Failed to get attribute location: {name}"))
    }

    pub fn element_creation_failed(element_type: &str) -> Self {
        Self::Resource(format!("Failed to create element: {element_type}"))
    }

    // Callback errors
    pub fn listener_attach_failed(event: &str) -> Self {
        Self::Callback(format!("Failed to add {event} listener"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_carries_category() {
        assert_eq!(
            Error::canvas_not_found().to_string(),
            "Initialization error: Unable to retrieve canvas"
        );
        assert_eq!(
            Error::shader_link_failed("bad varying".to_string()).to_string(),
            "Shader error: Shader linking failed: bad varying"
        );
        assert_eq!(
            Error::uniform_location_failed("u_projection").to_string(),
            "Resource error: Failed to get uniform location: u_projection"
        );
        assert_eq!(
            Error::listener_attach_failed("click").to_string(),
            "Event listener error: Failed to add click listener"
        );
    }
}
