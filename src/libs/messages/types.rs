#[derive(Debug, Clone)]
pub enum Message {
    // === CONVERSION MESSAGES ===
    ConvertingFile {
        input: String,
        target: String,
    },
    FileConverted {
        input: String,
        output: String,
        tasks: usize,
    },
    FilePrinted(String), // input path
    FileConvertFailed {
        input: String,
        error: String,
    },
    ConversionFinished {
        converted: usize,
        failed: usize,
    },
    ConversionFailed(usize), // failed count
    SummaryHeader,

    // === FILE ERRORS ===
    FileReadFailed(String),       // path
    FileWriteFailed(String),      // path
    OutputExists(String),         // path
    SameInputAndOutput(String),   // path
    ConversionTaskFailed(String), // join error

    // === CONFIGURATION MESSAGES ===
    ConfigSaved(String), // path
    ConfigLoadFailed(String), // error
}
