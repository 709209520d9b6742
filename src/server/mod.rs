//! HTTP backend: community boards, replies, votes, studies and file storage.
//!
//! The backend uses Axum as the web framework, SeaORM over SQLite for
//! persistence and tower-sessions for login state.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, caller resolution and DTO conversion
//! - **Service Layer** (`service/`) - Business rules and transactions
//! - **Data Layer** (`data/`) - Repositories over SeaORM entities
//! - **Model Layer** (`model/`) - Domain models and operation parameter types
//! - **Error Layer** (`error/`) - Application errors and the response envelope mapping
//! - **Middleware** (`middleware/`) - Session wrapper and authentication guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based configuration
//! - **State** (`state`) - Shared application state (DB, file store, report threshold)
//! - **Startup** (`startup`) - Database, migrations, sessions and upload directory
//! - **Router** (`router`) - Route table and OpenAPI document
//! - **Storage** (`storage`) - Uploaded files on local disk
//!
//! # Request Flow
//!
//! 1. **Router** routes the request to a controller
//! 2. **Controller** resolves the caller, converts the DTO to params, calls a service
//! 3. **Service** checks rules and runs multi-step writes in one transaction
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** converts the result to a DTO inside the `{code, message, data}` envelope

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod storage;
