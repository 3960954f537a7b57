/// Key seam for name-addressed storage. The list only ever needs the lookup
/// key of a payload, so tests can substitute an instrumented payload type.
pub trait Named {
    fn name(&self) -> &str;
}
