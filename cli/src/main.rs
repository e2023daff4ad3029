mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, batch, check, enforce, validate};
use ipward_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose, commands.quiet);

    let cfg = Config {
        ranges_attribute: commands.attribute,
        forwarded_for_header: commands.forwarded_for_header,
        real_ip_header: commands.real_ip_header,
        no_banner: commands.no_banner,
        quiet: commands.quiet,
    };

    print::banner(cfg.no_banner, cfg.quiet);

    let passed: bool = match commands.command {
        Commands::Check { address, ranges } => {
            print::header("checking address", cfg.quiet);
            check::check(&address, &ranges, &cfg)
        }
        Commands::Validate { value } => {
            print::header("validating input", cfg.quiet);
            validate::validate(&value, &cfg)
        }
        Commands::Batch { ranges, file } => {
            print::header("batch evaluation", cfg.quiet);
            batch::batch(&ranges, file.as_deref(), &cfg)?
        }
        Commands::Enforce {
            event,
            client_id,
            allowed_ranges,
            forwarded_for,
            real_ip,
            remote_addr,
        } => {
            print::header("enforcing policy", cfg.quiet);
            let request = enforce::EnforceRequest {
                event: event.into(),
                client_id,
                allowed_ranges,
                forwarded_for,
                real_ip,
                remote_addr,
            };
            enforce::enforce(request, &cfg)
        }
    };

    print::end_of_program(cfg.quiet);

    Ok(if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
