use stoat_prep::config::Config;

/// Applies any recognised flags to the configuration.
///
/// The final argument is reserved for the path to a CNF file.
pub fn parse_args(config: &mut Config, args: &[String]) {
    let flags: &[String] = match args.len() {
        0 | 1 => &[],
        _ => &args[1..args.len() - 1],
    };

    for flag in flags {
        match flag.as_str() {
            "--no-self-subsumption" => config.self_subsumption = false,

            "--no-subsumption" => config.subsumption = false,

            _ if flag.starts_with("--occurrence-bound=") => {
                match flag["--occurrence-bound=".len()..].parse() {
                    Ok(bound) => config.occurrence_bound = bound,
                    Err(_) => {
                        println!("c Unreadable occurrence bound in {flag}");
                        std::process::exit(1);
                    }
                }
            }

            _ => {
                println!("c Unrecognised flag {flag}");
                std::process::exit(1);
            }
        }
    }
}
