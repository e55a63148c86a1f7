//! Which employees are told about a staffing change, and how.

use crewboard_core::events::{AssignmentEvent, AssignmentEventType};
use crewboard_core::types::id::{JobId, UserId};
use crewboard_entity::job::{ShiftPartition, Zone};

/// Events produced by replacing `before` with `after` on one job.
///
/// Newly assigned employees get `JobAssignment`, employees that switched
/// shifts get `ShiftChange`, and employees no longer assigned get
/// `JobUnassignment`. `before` is `None` for a job that was just created.
pub fn assignment_events(
    job_id: JobId,
    before: Option<&ShiftPartition>,
    after: &ShiftPartition,
    actor: Option<UserId>,
) -> Vec<AssignmentEvent> {
    let previous_zone = |id| before.map_or(Zone::Pool, |b| b.zone_of(id));
    let mut events = Vec::new();

    for id in after.assigned_employees() {
        let event_type = match (previous_zone(*id), after.zone_of(*id)) {
            (Zone::Pool, _) => Some(AssignmentEventType::JobAssignment),
            (old, new) if old != new => Some(AssignmentEventType::ShiftChange),
            _ => None,
        };
        if let Some(event_type) = event_type {
            events.push(AssignmentEvent::new(*id, job_id, event_type, actor));
        }
    }

    if let Some(before) = before {
        for id in before.assigned_employees() {
            if !after.is_assigned(*id) {
                events.push(AssignmentEvent::new(
                    *id,
                    job_id,
                    AssignmentEventType::JobUnassignment,
                    actor,
                ));
            }
        }
    }

    events
}
