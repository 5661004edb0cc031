use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive as _, ToPrimitive as _};
use strum::{Display, EnumIter, EnumString};
use thiserror::Error;

pub type VenueStatusPrimitive = i16;

#[rustfmt::skip]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum VenueStatus {
    #[default]
    Pending         = 0,
    Approved        = 1,
    Rejected        = 2,
    PendingUpdate   = 3,
    PendingDeletion = 4,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum VenueAction {
    Approve,
    Reject,
    RequestUpdate,
    RequestDeletion,
    AcceptUpdate,
    RejectUpdate,
    AcceptDeletion,
    RejectDeletion,
}

impl VenueAction {
    /// Only the owner of a venue may request changes, all
    /// other actions are reserved for admins.
    pub fn requires_admin(self) -> bool {
        !matches!(self, Self::RequestUpdate | Self::RequestDeletion)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Status(VenueStatus),
    Removed,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Cannot {action} a venue with status {from}")]
pub struct InvalidTransition {
    pub from: VenueStatus,
    pub action: VenueAction,
}

impl VenueStatus {
    /// Live venues are publicly visible and bookable.
    pub fn is_live(self) -> bool {
        matches!(
            self,
            Self::Approved | Self::PendingUpdate | Self::PendingDeletion
        )
    }

    pub fn apply(self, action: VenueAction) -> Result<Transition, InvalidTransition> {
        use Transition::*;
        use VenueAction as A;
        use VenueStatus as S;
        let next = match (self, action) {
            (S::Pending, A::Approve) => Status(S::Approved),
            (S::Pending, A::Reject) => Status(S::Rejected),
            (S::Approved, A::RequestUpdate) => Status(S::PendingUpdate),
            (S::Approved, A::RequestDeletion) => Status(S::PendingDeletion),
            (S::PendingUpdate, A::AcceptUpdate | A::RejectUpdate) => Status(S::Approved),
            (S::PendingDeletion, A::AcceptDeletion) => Removed,
            (S::PendingDeletion, A::RejectDeletion) => Status(S::Approved),
            (from, action) => return Err(InvalidTransition { from, action }),
        };
        Ok(next)
    }
}

#[derive(Debug, Error)]
#[error("Invalid venue status primitive: {0}")]
pub struct InvalidVenueStatusPrimitive(VenueStatusPrimitive);

impl TryFrom<VenueStatusPrimitive> for VenueStatus {
    type Error = InvalidVenueStatusPrimitive;
    fn try_from(from: VenueStatusPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidVenueStatusPrimitive(from))
    }
}

impl From<VenueStatus> for VenueStatusPrimitive {
    fn from(from: VenueStatus) -> Self {
        from.to_i16().expect("venue status primitive")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;
    use Transition::*;
    use VenueAction as A;
    use VenueStatus as S;

    const ACTIONS: [VenueAction; 8] = [
        A::Approve,
        A::Reject,
        A::RequestUpdate,
        A::RequestDeletion,
        A::AcceptUpdate,
        A::RejectUpdate,
        A::AcceptDeletion,
        A::RejectDeletion,
    ];

    #[test]
    fn valid_transitions() {
        assert_eq!(S::Pending.apply(A::Approve), Ok(Status(S::Approved)));
        assert_eq!(S::Pending.apply(A::Reject), Ok(Status(S::Rejected)));
        assert_eq!(
            S::Approved.apply(A::RequestUpdate),
            Ok(Status(S::PendingUpdate))
        );
        assert_eq!(
            S::Approved.apply(A::RequestDeletion),
            Ok(Status(S::PendingDeletion))
        );
        assert_eq!(S::PendingUpdate.apply(A::AcceptUpdate), Ok(Status(S::Approved)));
        assert_eq!(S::PendingUpdate.apply(A::RejectUpdate), Ok(Status(S::Approved)));
        assert_eq!(S::PendingDeletion.apply(A::AcceptDeletion), Ok(Removed));
        assert_eq!(
            S::PendingDeletion.apply(A::RejectDeletion),
            Ok(Status(S::Approved))
        );
    }

    #[test]
    fn exactly_eight_transitions_are_allowed() {
        let allowed = S::iter()
            .flat_map(|s| ACTIONS.iter().map(move |a| s.apply(*a)))
            .filter(Result::is_ok)
            .count();
        assert_eq!(allowed, 8);
    }

    #[test]
    fn rejected_is_terminal() {
        for action in ACTIONS {
            assert!(S::Rejected.apply(action).is_err());
        }
    }

    #[test]
    fn only_one_pending_workflow() {
        assert_eq!(
            S::PendingUpdate.apply(A::RequestDeletion),
            Err(InvalidTransition {
                from: S::PendingUpdate,
                action: A::RequestDeletion
            })
        );
        assert!(S::PendingDeletion.apply(A::RequestUpdate).is_err());
        assert!(S::Pending.apply(A::RequestUpdate).is_err());
    }

    #[test]
    fn live_states() {
        let live: Vec<_> = S::iter().filter(|s| s.is_live()).collect();
        assert_eq!(live, vec![S::Approved, S::PendingUpdate, S::PendingDeletion]);
    }

    #[test]
    fn display_invalid_transition() {
        let err = S::Rejected.apply(A::Approve).unwrap_err();
        assert_eq!(err.to_string(), "Cannot approve a venue with status rejected");
    }

    #[test]
    fn actors() {
        assert!(A::Approve.requires_admin());
        assert!(A::AcceptDeletion.requires_admin());
        assert!(!A::RequestUpdate.requires_admin());
        assert!(!A::RequestDeletion.requires_admin());
    }
}
