pub type Result<T> = std::result::Result<T, PlanarityError>;

#[derive(Debug, thiserror::Error)]
pub enum PlanarityError {
    #[error("Self-loop at vertex {0}")]
    SelfLoop(usize),

    #[error("Edge ({0}, {1}) is already present")]
    DuplicateEdge(usize, usize),

    #[error("Vertex {0} does not exist")]
    NoSuchVertex(usize),

    #[error("Edge ({0}, {1}) does not exist")]
    NoSuchEdge(usize, usize),

    #[error("Planarity test requested before the DFS tables were computed")]
    NotPreprocessed,

    #[error("Embedding requested without a successful planarity test")]
    NotTested,

    #[error("DFS tables do not match the working graph: {0}")]
    StaleTables(String),

    #[error("Edge list parse error (line {line}): {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
