use crate::types::report::RepositoryRating;

pub fn to_markdown(ratings: &[RepositoryRating]) -> String {
    let mut output = String::new();
    output.push_str("# Repository Rating\n");

    if ratings.is_empty() {
        output.push_str("\n- none\n");
        return output;
    }

    for rating in ratings {
        let scores = &rating.scores;
        output.push_str(&format!("\n## {}\n\n", rating.repository));

        output.push_str("### Community\n\n");
        output.push_str(&format!(
            "- maturity: {}/5\n- activity: {}/5\n- popularity: {}/5\n- contributors: {}/5\n\n",
            scores.community.maturity,
            scores.community.activity,
            scores.community.popularity,
            scores.community.contributors
        ));

        output.push_str("### Tech\n\n");
        output.push_str(&format!(
            "- size: {}/5\n- cyclomatic_complexity: {}/5\n- cognitive_complexity: {}/5\n- duplication: {}/5\n- code_smells: {}/5\n\n",
            scores.tech.size,
            scores.tech.cyclomatic_complexity,
            scores.tech.cognitive_complexity,
            scores.tech.duplication,
            scores.tech.code_smells
        ));

        output.push_str("### Security\n\n");
        output.push_str(&format!(
            "- score_card: {}/5\n",
            scores.security.score_card
        ));
    }

    output
}
