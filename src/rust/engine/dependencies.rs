use crate::language::{Argument, Cursor};

/// Locations that must be evaluated before a call with `args` can run.
///
/// Each reference argument pulls in every known location at or beneath it,
/// in argument order and then `locations` order. `auto` is appended as-is;
/// duplicates are left for the host to deal with.
pub fn dependencies(args: &[Argument], locations: &[Cursor], auto: &[Cursor]) -> Vec<Cursor> {
    let mut deps: Vec<Cursor> = args
        .iter()
        .filter_map(Argument::as_reference)
        .flat_map(|path| locations.iter().filter(move |other| other.under(path)))
        .cloned()
        .collect();

    deps.extend(auto.iter().cloned());
    deps
}

#[cfg(test)]
#[path = "test_dependencies.rs"]
mod tests;
