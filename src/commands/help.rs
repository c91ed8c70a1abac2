//! Help and version display.

/// Display usage information in the structured log style.
pub fn display_help() {
    log_version!();
    log_block_start!("Usage: bannr [OPTIONS] [COMMAND]");
    log_block_start!("Commands:");
    log_indented!("simulate <seconds>  Run under a virtual clock and print the frame trace");
    log_indented!("                    (--multiplier N slows fast-forward to N virtual s/s)");
    log_block_start!("Options:");
    log_indented!("-c, --config <DIR>   Use configuration from DIR instead of the default");
    log_indented!("-d, --debug          Enable debug output");
    log_indented!("    --reduced-motion Disable slide autoplay for this run");
    log_indented!("-h, --help           Show this help");
    log_indented!("-V, --version        Show version");
    log_block_start!("Keys during an interactive run:");
    log_indented!("Left/p   previous slide");
    log_indented!("Right/n  next slide");
    log_indented!("1-9      jump to slide");
    log_indented!("r        reload configuration");
    log_indented!("q/Esc    quit");
    log_end!();
}

/// Display the version line.
pub fn display_version() {
    log_version!();
    log_end!();
}
