/// Execute an aggregate command deterministically (no IO, no async).
///
/// The canonical lifecycle in one step:
///
/// 1. **Decide**: calls `aggregate.handle(command)` to get events (pure, no
///    mutation). Every guard runs here; a rejected command returns the error
///    and leaves the aggregate untouched.
/// 2. **Evolve**: applies each event to the aggregate via
///    `aggregate.apply(event)`.
///
/// Because `handle` cannot mutate and `apply` cannot fail, the caller sees
/// the check-then-update sequence as atomic: the whole change or none of it.
/// The `&mut` receiver gives the sequence exclusive access for its entire
/// duration, which is the only mutual-exclusion boundary this crate needs in
/// a single-threaded host.
pub fn execute<A>(
    aggregate: &mut A,
    command: &A::Command,
) -> Result<Vec<A::Event>, A::Error>
where
    A: atelier_core::Aggregate,
{
    let events = A::handle(aggregate, command)?;
    for ev in &events {
        A::apply(aggregate, ev);
    }
    Ok(events)
}
