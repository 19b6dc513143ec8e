//! dct Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the dct
//! code-scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             dct-cli (CLI)               │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ScaffoldService, ConfigResolver,      │
//! │   NamespaceInferrer)                    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, Renderer, ProjectParser)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      dct-adapters (Infrastructure)      │
//! │ (LocalFilesystem, TeraRenderer, etc)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ArtifactRequest, ScaffoldConfig,       │
//! │  InferredNamespace)                     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use dct_core::{
//!     application::ScaffoldService,
//!     domain::{ArtifactKind, ArtifactRequest, Generation},
//! };
//!
//! let service = ScaffoldService::new(filesystem, renderer, parser);
//! let request = ArtifactRequest::new(
//!     ArtifactKind::new("command")?,
//!     "PlaceOrder",
//!     "Features/Orders",
//! )?;
//!
//! match service.generate(&request)? {
//!     Generation::Rendered(artifact) => println!("{}", artifact.content),
//!     Generation::TemplateNotFound { path, .. } => eprintln!("missing {}", path.display()),
//! }
//! ```

pub mod application;
pub mod domain;
pub mod error;
