use crate::locale::Locale;

/// Transient, user-visible message raised by a view action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    LoginRequired,
    EmptyComment,
    CommentTooLong { max: usize },
    ActionFailed,
    PostNotFound,
    /// Unknown route in a front end.
    PageNotFound,
}

impl Notice {
    pub fn message(&self, locale: Locale) -> String {
        match (self, locale) {
            (Notice::LoginRequired, Locale::Ko) => "로그인이 필요합니다.".to_string(),
            (Notice::LoginRequired, Locale::En) => "You need to log in.".to_string(),
            (Notice::EmptyComment, Locale::Ko) => "댓글 내용을 입력해주세요.".to_string(),
            (Notice::EmptyComment, Locale::En) => "Please write a comment first.".to_string(),
            (Notice::CommentTooLong { max }, Locale::Ko) => {
                format!("댓글은 {max}자 이하로 작성해주세요.")
            }
            (Notice::CommentTooLong { max }, Locale::En) => {
                format!("Comments are limited to {max} characters.")
            }
            (Notice::ActionFailed, Locale::Ko) => {
                "요청을 처리하지 못했습니다. 잠시 후 다시 시도해주세요.".to_string()
            }
            (Notice::ActionFailed, Locale::En) => {
                "Something went wrong. Please try again later.".to_string()
            }
            (Notice::PostNotFound, Locale::Ko) => "게시글이 존재하지 않습니다.".to_string(),
            (Notice::PostNotFound, Locale::En) => "This post does not exist.".to_string(),
            (Notice::PageNotFound, Locale::Ko) => "페이지를 찾을 수 없습니다.".to_string(),
            (Notice::PageNotFound, Locale::En) => "Page not found.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_notice_is_localized() {
        assert_eq!(Notice::LoginRequired.message(Locale::Ko), "로그인이 필요합니다.");
        assert_eq!(Notice::LoginRequired.message(Locale::En), "You need to log in.");
    }

    #[test]
    fn page_not_found_is_localized() {
        assert_eq!(
            Notice::PageNotFound.message(Locale::Ko),
            "페이지를 찾을 수 없습니다."
        );
        assert_eq!(Notice::PageNotFound.message(Locale::En), "Page not found.");
    }
}
