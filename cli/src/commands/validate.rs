use ipward_common::config::Config;
use ipward_common::network::{Address, RangeDescriptor, is_valid_address, is_valid_range};

use crate::terminal::{format, print};

/// Reports whether `value` is a valid address and/or CIDR range.
///
/// Returns `true` if it is either.
pub fn validate(value: &str, cfg: &Config) -> bool {
    let valid_address: bool = is_valid_address(value);
    let valid_range: bool = is_valid_range(value);

    if cfg.quiet > 0 {
        print::print(&format!(
            "address={} range={}",
            format::yes_no(valid_address),
            format::yes_no(valid_range)
        ));
        return valid_address || valid_range;
    }

    print::set_key_width(["Address", "Range", "Family", "Span", "Error"]);

    match Address::parse(value) {
        Ok(address) => {
            print::aligned_line("Address", format::yes_no(true));
            print::aligned_line("Family", address.family().to_string());
        }
        Err(e) => {
            print::aligned_line("Address", format::yes_no(false));
            print::aligned_line("Error", e.to_string());
        }
    }

    print::aligned_line("Range", format::yes_no(valid_range));
    if valid_range {
        match RangeDescriptor::parse(value) {
            Ok(_) => print::aligned_line("Span", format::range_span(value.trim())),
            Err(e) => print::aligned_line("Error", e.to_string()),
        }
    }

    valid_address || valid_range
}
