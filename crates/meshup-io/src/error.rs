/// An error type for the io module.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    /// Error when the file does not exist.
    #[error("File does not exist: {0}")]
    FileDoesNotExist(std::path::PathBuf),

    /// Error to open or manipulate the file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// Error to parse the geometry XML document.
    #[error("Failed to parse the geometry document. {0}")]
    XmlParseError(#[from] quick_xml::DeError),

    /// Error to serialize the geometry XML document.
    #[error("Failed to serialize the geometry document. {0}")]
    XmlSerializeError(#[from] quick_xml::SeError),

    /// Error to parse a coordinate value.
    #[error("Failed to parse coordinate value `{token}`. {source}")]
    InvalidNumber {
        /// The token that failed to parse.
        token: String,
        /// The underlying float parse error.
        source: std::num::ParseFloatError,
    },

    /// Error to encode the PNG image.
    #[error("Failed to encode the png image. {0}")]
    PngEncodingError(String),

    /// Error to build the grid from the parsed coordinates.
    #[error("Failed to create grid. {0}")]
    GridCreationError(#[from] meshup_grid::GridError),
}
