use cfg_if::cfg_if;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};
use tracing_subscriber::util::SubscriberInitExt;

/// Game events at debug, everything else (wgpu, naga, winit) at warn.
const DEFAULT_DIRECTIVES: &str = "warn,lane_dodger=debug";

cfg_if! {
    if #[cfg(target_arch = "wasm32")] {
        pub fn init() {
            // No environment in the browser, so the defaults always apply
            let filter = EnvFilter::new(DEFAULT_DIRECTIVES);
            let wasm_layer = tracing_wasm::WASMLayer::new(tracing_wasm::WASMLayerConfig::default());

            // A second mount on the same page keeps the first subscriber
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(wasm_layer)
                .try_init();

            #[cfg(feature = "console_error_panic_hook")]
            console_error_panic_hook::set_once();
        }
    } else {
        use std::env;
        use std::io;
        use std::path::PathBuf;

        use once_cell::sync::OnceCell;
        use tracing_appender::non_blocking::WorkerGuard;
        use tracing_subscriber::fmt;

        const LOG_DIR: &str = "logs";
        const LOG_FILE: &str = "lane-dodger.log";

        static FILE_GUARD: OnceCell<WorkerGuard> = OnceCell::new();

        /// `RUST_LOG_FILE` if set, else `logs/lane-dodger.log`. Split into the
        /// directory and file prefix the daily roller wants.
        fn log_file() -> (PathBuf, PathBuf) {
            let path = env::var_os("RUST_LOG_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(LOG_DIR).join(LOG_FILE));
            let dir = match path.parent() {
                Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
                _ => PathBuf::from("."),
            };
            let name = path.file_name().map(PathBuf::from).unwrap_or_else(|| PathBuf::from(LOG_FILE));
            (dir, name)
        }

        pub fn init() {
            let filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

            let console_layer = fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .compact();

            let (dir, name) = log_file();
            let (writer, guard) = tracing_appender::non_blocking(
                tracing_appender::rolling::daily(dir, name),
            );
            let _ = FILE_GUARD.set(guard);

            let file_layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true);

            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(console_layer)
                .with(file_layer)
                .try_init();

            // Panics land in the log file too, not only on stderr
            let default_hook = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                tracing::error!("{info}");
                default_hook(info);
            }));
        }

        #[cfg(test)]
        mod tests {
            use super::*;

            #[test]
            fn test_log_file_default_and_override() {
                // Only this test touches RUST_LOG_FILE
                env::remove_var("RUST_LOG_FILE");
                assert_eq!(log_file(), (PathBuf::from("logs"), PathBuf::from("lane-dodger.log")));

                env::set_var("RUST_LOG_FILE", "run.log");
                assert_eq!(log_file(), (PathBuf::from("."), PathBuf::from("run.log")));

                env::set_var("RUST_LOG_FILE", "/tmp/ld/game.log");
                assert_eq!(log_file(), (PathBuf::from("/tmp/ld"), PathBuf::from("game.log")));
                env::remove_var("RUST_LOG_FILE");
            }
        }
    }
}
