pub use super::comment::Entity as Comment;
pub use super::comment_like::Entity as CommentLike;
pub use super::follow::Entity as Follow;
pub use super::message::Entity as Message;
pub use super::notification::Entity as Notification;
pub use super::post::Entity as Post;
pub use super::post_like::Entity as PostLike;
pub use super::saved_post::Entity as SavedPost;
pub use super::story::Entity as Story;
pub use super::story_like::Entity as StoryLike;
pub use super::story_view::Entity as StoryView;
pub use super::user::Entity as User;
