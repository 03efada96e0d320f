/// Reseña tal como la devuelve el backend (`"<nombre> said: \n<texto>"`)
pub type Review = String;

/// Campos del formulario de reseñas que espera `POST /reviews`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSubmission {
    pub reviewer_name: String,
    pub reviewer_input: String,
}

impl ReviewSubmission {
    pub const NAME_FIELD: &'static str = "reviewer-name";
    pub const INPUT_FIELD: &'static str = "reviewer-input";

    pub fn new(reviewer_name: impl Into<String>, reviewer_input: impl Into<String>) -> Self {
        Self {
            reviewer_name: reviewer_name.into(),
            reviewer_input: reviewer_input.into(),
        }
    }

    /// Pares clave/valor en el orden del formulario HTML
    pub fn form_fields(&self) -> [(&'static str, &str); 2] {
        [
            (Self::NAME_FIELD, self.reviewer_name.as_str()),
            (Self::INPUT_FIELD, self.reviewer_input.as_str()),
        ]
    }
}

/// Texto del contenedor de reseñas: cada reseña seguida de una línea en blanco
pub fn format_reviews(reviews: &[Review]) -> String {
    reviews.iter().fold(String::new(), |mut text, review| {
        text.push_str(review);
        text.push_str("\n\n");
        text
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_review_is_followed_by_blank_line() {
        let reviews = vec!["a".to_string(), "b".to_string()];
        assert_eq!(format_reviews(&reviews), "a\n\nb\n\n");
    }

    #[test]
    fn empty_list_clears_container() {
        assert_eq!(format_reviews(&[]), "");
    }

    #[test]
    fn multiline_review_is_kept_verbatim() {
        let reviews = vec!["Ana said: \nGreat pizza".to_string()];
        assert_eq!(format_reviews(&reviews), "Ana said: \nGreat pizza\n\n");
    }

    #[test]
    fn form_fields_use_html_names() {
        let submission = ReviewSubmission::new("Ana", "Great pizza");
        assert_eq!(
            submission.form_fields(),
            [("reviewer-name", "Ana"), ("reviewer-input", "Great pizza")]
        );
    }
}
