use conlog::{Severity, sink_config};

fn main() {
    sink_config()
        .with_threshold(Severity::Debug)
        .route_to_stderr()
        .init_global();
    conlog::install_log_bridge();

    conlog::debug("debug lines stay on stdout");
    conlog::info("so do info lines");
    conlog::warn("warnings go to stderr");
    log::error!("so do errors logged through the log facade");

    // already configured: ignored
    sink_config().with_threshold(Severity::Fatal).init_global();
    conlog::info("still printed");

    sink_config()
        .with_threshold(Severity::Fatal)
        .init_global_overwrite();
    conlog::error("not printed anymore");
    conlog::fatal("only fatal lines get through now");
}
