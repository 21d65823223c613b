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
use Commands::Build;
use Commands::Output;
use anyhow::Result;
use clap::Parser;
use flutterlane::build::run_build;
use flutterlane::cli::Cli;
use flutterlane::cli::Commands;
use flutterlane::command::FlutterRunner;
use flutterlane::config::BuildConfig;
use flutterlane::context::Context;
use flutterlane::logging::setup_tracing;

#[tokio::main]
async fn main() -> Result<()> {
  let _guard = setup_tracing()?;

  let Cli { command } = Cli::parse();
  let main_span = tracing::info_span!("flutterlane");
  let _enter = main_span.enter();

  match command {
    Build(opts) => {
      tracing::info!("Initializing Flutter Build...");

      let config = BuildConfig::resolve(&opts)?;
      let mut context = Context::load(&opts.context)?;
      let runner = FlutterRunner::new(&opts.flutter_bin);

      let built = run_build(&config, &mut context, &runner).await?;
      context.store(&opts.context)?;

      if let Some(path) = built {
        println!("{}", path.display());
      }
      tracing::info!("Flutter Build Complete.");
    }
    Output { context } => {
      let context = Context::load(&context)?;
      match context.flutter_output {
        Some(path) => println!("{}", path.display()),
        None => anyhow::bail!("No built file path recorded in the pipeline context"),
      }
    }
  }

  Ok(())
}
