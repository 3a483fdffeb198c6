//! LS-8 command-line runner.
//!
//! This binary is the thin shell around `ls8-core`. It performs:
//! 1. **Run:** Load a program file, execute it, print PRN values to stdout.
//! 2. **Disassemble:** Load a program file and list its instructions.
//!
//! Diagnostics and trace lines go to stderr through `tracing`.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::error;
use tracing_subscriber::EnvFilter;

use ls8_core::config::{Config, UnknownInstructionPolicy};
use ls8_core::isa::disasm::disassemble;
use ls8_core::soc::{Memory, WriterSink};
use ls8_core::{Cpu, sim::loader};

#[derive(Parser, Debug)]
#[command(
    name = "ls8",
    author,
    version,
    about = "LS-8 interpreter",
    long_about = "Run or disassemble an LS-8 program.\n\nPrograms are text files with one 8-bit binary literal per line; `#` starts a comment.\n\nExamples:\n  ls8 run programs/mult.ls8\n  ls8 run programs/call.ls8 --trace --max-steps 1000\n  ls8 disasm programs/stack.ls8"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load and execute a program.
    Run {
        /// Program source file.
        file: PathBuf,

        /// JSON configuration file; command-line flags override it.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Log a trace line before every instruction.
        #[arg(long)]
        trace: bool,

        /// Stop with an error if the program has not halted after this many steps.
        #[arg(long)]
        max_steps: Option<u64>,

        /// What to do when an undefined opcode is fetched.
        #[arg(long, value_enum)]
        on_unknown: Option<UnknownPolicyArg>,

        /// Print execution statistics as JSON to stderr after the run.
        #[arg(long)]
        stats: bool,
    },

    /// Disassemble a program without running it.
    Disasm {
        /// Program source file.
        file: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum UnknownPolicyArg {
    Halt,
    Skip,
}

impl From<UnknownPolicyArg> for UnknownInstructionPolicy {
    fn from(arg: UnknownPolicyArg) -> Self {
        match arg {
            UnknownPolicyArg::Halt => Self::Halt,
            UnknownPolicyArg::Skip => Self::Skip,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let trace = matches!(cli.command, Commands::Run { trace: true, .. });
    init_logging(trace);

    match cli.command {
        Commands::Run {
            file,
            config,
            trace,
            max_steps,
            on_unknown,
            stats,
        } => cmd_run(&file, config, trace, max_steps, on_unknown, stats),
        Commands::Disasm { file } => cmd_disasm(&file),
    }
}

/// Installs the stderr subscriber. `RUST_LOG` wins; otherwise `warn`, or
/// `trace` when tracing was requested.
fn init_logging(trace: bool) {
    let default = if trace { "trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Loads `file`, runs it to HLT, and prints PRN values to stdout.
///
/// Exits non-zero if the configuration or program cannot be loaded, or if the
/// engine faults; the machine state is logged in the latter case.
fn cmd_run(
    file: &Path,
    config_path: Option<PathBuf>,
    trace: bool,
    max_steps: Option<u64>,
    on_unknown: Option<UnknownPolicyArg>,
    print_stats: bool,
) -> ExitCode {
    let mut config = match config_path {
        Some(path) => match Config::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                error!("{}: {e}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => Config::default(),
    };
    if trace {
        config.general.trace_instructions = true;
    }
    if max_steps.is_some() {
        config.general.max_steps = max_steps;
    }
    if let Some(policy) = on_unknown {
        config.execution.unknown_instruction = policy.into();
    }

    let mut cpu = Cpu::with_config(WriterSink::stdout(), &config);
    if let Err(e) = cpu.load_file(file) {
        error!("{}: {e}", file.display());
        return ExitCode::FAILURE;
    }

    let result = cpu.run();

    if print_stats {
        eprintln!("{}", cpu.stats.to_json());
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(fault) => {
            error!("{fault}");
            error!("{}", cpu.trace_line());
            ExitCode::FAILURE
        }
    }
}

/// Loads `file` into a scratch memory and prints one line per instruction.
fn cmd_disasm(file: &Path) -> ExitCode {
    let mut memory = Memory::new();
    let len = match loader::load_file(&mut memory, file) {
        Ok(len) => len,
        Err(e) => {
            error!("{}: {e}", file.display());
            return ExitCode::FAILURE;
        }
    };
    for line in disassemble(&memory.as_slice()[..len]) {
        println!("{line}");
    }
    ExitCode::SUCCESS
}
