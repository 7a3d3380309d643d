//! CSV log storage: row codec, tolerant reader and durable writer.

pub mod codec;
pub mod reader;
pub mod writer;

pub use codec::{RowReader, TitleWidth, decode_row, encode_row};
pub use reader::{Layout, LogContents, RowDiagnostic, read_all};
pub use writer::{HeaderPolicy, LogWriter};
