//! # Content Analyzer
//!
//! A content analysis and document retrieval toolkit.
//!
//! Content Analyzer computes sentiment polarity, ranked keywords, a
//! readability grade, and corpus statistics for free-form text, and
//! maintains an in-memory document collection with relevance search and
//! cached per-document analyses — exposed through a CLI and a
//! tool-dispatch HTTP server.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌───────────────────────────┐
//! │ DocumentStore│──▶│ Analyzer                   │
//! │  + cache     │   │ sentiment/keywords/        │
//! │  + search    │   │ readability/stats          │
//! └──────┬───────┘   └───────────────────────────┘
//!        │
//!        ├────────────────┐
//!        ▼                ▼
//!   ┌──────────┐    ┌──────────┐
//!   │   CLI    │    │   HTTP   │
//!   │  (cana)  │    │ (tools)  │
//!   └──────────┘    └──────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! cana analyze "I absolutely love this!"
//! cana search "technology"
//! cana stats
//! cana serve                    # start the tool server
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | Core data types |
//! | [`text`] | Tokenization and segmentation |
//! | [`sentiment`] | Lexicon-based polarity scoring |
//! | [`keywords`] | Keyword ranking |
//! | [`readability`] | Flesch–Kincaid scoring |
//! | [`stats`] | Text statistics |
//! | [`analyze`] | Analysis orchestration |
//! | [`store`] | In-memory document store + cache |
//! | [`search`] | Relevance search |
//! | [`traits`] | Tool trait, registry, context |
//! | [`server`] | Tool-dispatch HTTP server |

pub mod analyze;
pub mod cache;
pub mod config;
pub mod error;
pub mod keywords;
pub mod models;
pub mod readability;
pub mod search;
pub mod sentiment;
pub mod server;
pub mod stats;
pub mod store;
pub mod text;
pub mod traits;
