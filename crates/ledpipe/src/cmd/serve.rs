use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;

use ledpipe::{LedServer, LedStore};

use crate::cmd::ServeArgs;
use crate::exit::{gateway_error, CliError, CliResult, INTERNAL, SUCCESS};
use crate::output::{print_snapshot, OutputFormat};

pub fn run(args: ServeArgs, format: OutputFormat) -> CliResult<i32> {
    let store = Arc::new(LedStore::new());
    let changes = store.subscribe();

    let server = Arc::new(LedServer::new(Arc::clone(&store), &args.path));
    server.start().map_err(|err| gateway_error("bind failed", err))?;

    let running = Arc::new(AtomicBool::new(true));
    install_ctrlc_handler(running.clone(), server.clone())?;

    while running.load(Ordering::SeqCst) {
        match changes.recv_timeout(Duration::from_millis(200)) {
            Ok(()) => {
                if args.watch {
                    print_snapshot(&store.snapshot(), format);
                }
            }
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    server.stop();
    Ok(SUCCESS)
}

fn install_ctrlc_handler(running: Arc<AtomicBool>, server: Arc<LedServer>) -> CliResult<()> {
    ctrlc::set_handler(move || {
        running.store(false, Ordering::SeqCst);
        server.stop();
    })
    .map_err(|err| CliError::new(INTERNAL, format!("signal handler setup failed: {err}")))
}
