// tracetty: interactive viewer for binee instruction traces

use clap::Parser;

use tracetty::emulator::EmulatorInvocation;
use tracetty::trace::TraceStore;
use tracetty::ui::term::TerminalGuard;
use tracetty::ui::App;

/// Run binee in debug with memory tracking and browse the trace
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Load libs!
    #[clap(long, default_value = "false")]
    loadlibs: bool,

    /// Show dll names on function calls
    #[clap(long, default_value = "false")]
    showdll: bool,

    /// Target binary to run under the emulator
    #[clap(long, default_value = "tests/ConsoleApplication1_x86.exe")]
    testbin: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let invocation = EmulatorInvocation {
        target: args.testbin,
        show_dll_names: args.showdll,
        load_libraries: args.loadlibs,
    };

    eprintln!("Running {}...", invocation.target);
    let output = match invocation.run() {
        Ok(output) => output,
        Err(e) => {
            eprintln!("Emulator error: {}", e);
            std::process::exit(1);
        }
    };

    let store = match TraceStore::parse(&output.stdout) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Trace error: {}", e);
            std::process::exit(1);
        }
    };
    eprintln!("Parsed {} instruction record(s).", store.len());

    // Terminal state is restored by the guard on every exit path
    let mut guard = TerminalGuard::acquire()?;
    let mut app = App::new(store, output.stderr);
    let res = app.run(guard.terminal_mut());
    drop(guard);

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
