use crate::admission::enums::admission_decision::AdmissionDecision;

impl AdmissionDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, AdmissionDecision::Allow)
    }
}
