//! quill-icons — build-time icon asset generator.
//!
//! With no arguments this reproduces the reference invocation: it writes
//! `icon-192.png` and `icon-512.png` to the working directory. Sizes, the
//! output directory, and the naming stem can be overridden on the command
//! line, or a whole plan can be loaded from a JSON file.
//!
//! Run with:
//!   cargo run -- --size 192 --size 512 --out-dir client/public

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use quill_icons::RenderPlan;

#[derive(Debug, Parser)]
#[command(name = "quill-icons", about = "Procedurally generate the app's PNG icons")]
struct Cli {
    /// Icon sizes to generate, in pixels. Defaults to 192 and 512.
    #[arg(long = "size", value_name = "PX")]
    sizes: Vec<u32>,

    /// Directory to write the PNG files into.
    #[arg(long, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// File name stem; a size of 192 produces `<STEM>-192.png`.
    #[arg(long, value_name = "STEM")]
    stem: Option<String>,

    /// Load a render plan from a JSON file. Command-line flags override
    /// the corresponding plan fields.
    #[arg(long, value_name = "FILE")]
    plan: Option<PathBuf>,
}

impl Cli {
    fn into_plan(self) -> Result<RenderPlan, quill_icons::RenderError> {
        let mut plan = match self.plan {
            Some(path) => RenderPlan::from_file(path)?,
            None => RenderPlan::new(),
        };

        if !self.sizes.is_empty() {
            plan = plan.with_sizes(self.sizes);
        }
        if let Some(dir) = self.out_dir {
            plan = plan.with_output_dir(dir);
        }
        if let Some(stem) = self.stem {
            plan = plan.with_file_stem(stem);
        }

        Ok(plan)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let plan = match cli.into_plan() {
        Ok(plan) => plan,
        Err(err) => {
            eprintln!("ERROR: {err}");
            return ExitCode::FAILURE;
        }
    };

    match plan.execute() {
        Ok(written) => {
            for path in written {
                println!("Created {}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("ERROR: {err}");
            ExitCode::FAILURE
        }
    }
}
