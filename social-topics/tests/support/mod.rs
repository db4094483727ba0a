use social_topics::{SharedActiveUser, User};

pub(crate) const NETWORK: &str = "net1";
pub(crate) const USER_PATH: &str = "net1/user/u1";
pub(crate) const COMMUNITY_PATH: &str = "net1/social/community/c1";
pub(crate) const POST_PATH: &str = "net1/social/community/c1/post/p1";
pub(crate) const CHANNEL_PATH: &str = "net1/chat/channel/c1";
pub(crate) const SUB_CHANNEL_PATH: &str = "net1/chat/channel/c1/subchannel/s1";
pub(crate) const MESSAGE_PATH: &str = "net1/chat/channel/c1/subchannel/s1/message/m1";

pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt::try_init();
}

pub(crate) fn user() -> User {
    User::new("u1", USER_PATH)
}

pub(crate) fn logged_in_session() -> SharedActiveUser {
    SharedActiveUser::new(Some(user()))
}
