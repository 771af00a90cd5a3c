//! Fundcraft Proposal PDF - renders a client proposal into a shareable
//! document.
//!
//! The crate is split into a pure assembly stage (`ProposalData` in,
//! logical `Block`s out) and a thin emission stage over the PDF backend.
//! Hosts deliver the bytes through a `DocumentSink`; nothing here touches
//! the filesystem unless asked to.

mod content;
mod document_model;
mod errors;
mod renderer;
mod sink;

pub use content::{build_blocks, category_mix, suggested_filename, Block, CategoryMix};
pub use document_model::{AdvisorInfo, ClientInfo, FundLine, ProposalData};
pub use errors::RenderError;
pub use renderer::render;
pub use sink::{render_to_sink, DocumentSink, FileSystemSink};
