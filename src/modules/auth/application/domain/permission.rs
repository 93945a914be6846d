use super::entities::{Actor, UserId};

/// An actor may mutate an entity when it is an admin or owns the entity.
/// No actor, no permission.
pub fn is_permit(owner: UserId, actor: Option<&Actor>) -> bool {
    match actor {
        Some(actor) => actor.is_admin() || actor.id == owner,
        None => false,
    }
}
