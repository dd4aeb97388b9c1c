use console::style;

/// Print an error message on stderr, styled when stderr is a terminal.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold().for_stderr(), message);
}

/// Print the derived version on stdout, unstyled so it can be captured.
pub fn display_version(version: &str) {
    println!("{}", version);
}
