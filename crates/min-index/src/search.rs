use crate::{Config, Error, Extremum, Goal, best::Best};

/// Scans `values` once and returns the position and value of its extremum.
///
/// The goal `G` picks the direction ([`Minimize`](crate::Minimize) or
/// [`Maximize`](crate::Maximize)) and `config` picks which index wins a tie.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] if `values` is empty.
pub fn find<G, T>(values: &[T], config: &Config) -> Result<Extremum<T>, Error>
where
    G: Goal,
    T: Ord + Copy,
{
    let Some((&first, rest)) = values.split_first() else {
        log::debug!("extremum requested for an empty sequence");
        return Err(Error::EmptyInput);
    };

    let tie_break = config.tie_break();
    let mut best = Best::start(0, first);
    for (offset, &value) in rest.iter().enumerate() {
        best.offer::<G>(offset + 1, value, tie_break);
    }

    let extremum = best.finish();
    log::trace!(
        "scanned {} values, extremum at index {}",
        values.len(),
        extremum.index
    );
    Ok(extremum)
}
