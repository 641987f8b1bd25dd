pub mod draft;
pub mod form_values;
pub mod service_log;
pub mod service_type;

pub use draft::Draft;
pub use form_values::{FormPatch, ServiceLogFormValues};
pub use service_log::ServiceLog;
pub use service_type::ServiceType;

/// Common write seam for the two editable shapes of the same data:
/// an ephemeral draft and a finalized service log. Both absorb a full
/// form snapshot and refresh their own bookkeeping fields.
pub trait EditableRecord {
    fn record_id(&self) -> &str;
    fn write_form_values(&mut self, values: ServiceLogFormValues);
}
