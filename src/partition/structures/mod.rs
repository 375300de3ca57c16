mod membership;

pub(crate) use membership::Membership;
