// Copyright 2025 Chisomo Makombo Sakala
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! # Flutterlane
//!
//! `flutterlane` is a pipeline action for building Flutter applications.
//! It assembles the `flutter build` command line from layered configuration
//! and the shared pipeline context, invokes the tool, and records the built
//! artifact path for later automation steps.
//!
//! This crate contains the main library logic for the `flane` CLI, but its
//! core modules (`build`, `config`, `context`) could be used independently.
//!
//! ## Core Modules
//!
//! * [`build`]: Contains the `run_build` action. It composes the argument
//!   vector, invokes the tool, and records the extracted artifact path in
//!   the pipeline context.
//! * [`config`]: Resolves the `BuildConfig` record from defaults, an
//!   optional JSON profile, `FL_FLUTTER_*` environment variables, and
//!   command-line options.
//! * [`context`]: The shared pipeline context store, persisted as JSON
//!   between pipeline steps.
//! * [`command`]: The `ToolRunner` seam and the real `flutter` subprocess
//!   runner.
//! * [`output`]: Extracts the built file path from the tool's output.
//! * [`cli`]: Defines the `clap`-based command-line interface.
//! * [`error`]: Defines the custom error types for the library.
//! * [`logging`]: Provides the `setup_tracing` utility.

pub mod build;
pub mod cli;
pub mod command;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod output;
