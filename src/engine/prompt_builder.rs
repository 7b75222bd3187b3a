use crate::model::bill::BillLine;

// Builds the prompts sent to the external models.
// Intentionally dumb: this module only formats text. No parsing, no
// networking, no engine logic.

/// Fixed instruction for the vision model. The line parser consumes
/// exactly this "item  price per line" format.
pub fn extraction_prompt() -> &'static str {
    "You are an expert in extracting structured data from images.\n\
     You will be provided with an image of a bill. Extract the items and \
     their corresponding prices and return the result as the below format.\n\
     For example:\n\
     Item 1  12.50\n\
     Item 2  8.99\n\
     Item 3  15.00\n"
}

/// Prompt for the Bill Q&A model: fixed instruction, the current bill
/// lines, the roster, then the user's question.
pub fn question_prompt(lines: &[BillLine], roster: &[String], question: &str) -> String {
    let mut prompt = String::new();

    prompt.push_str(
        "You are an expert on understanding bills. Here is a list of items \
         and prices extracted from a bill:\n\n",
    );
    push_items_section(&mut prompt, lines);
    push_roster_section(&mut prompt, roster);
    prompt.push_str(
        "A user will now ask you a question related to the bill. Please \
         respond based on the items, prices, and any relevant details. Be \
         as helpful as possible.\n\n",
    );
    prompt.push_str(&format!("User's question: \"{}\"\n", question));

    prompt
}

fn push_items_section(prompt: &mut String, lines: &[BillLine]) {
    for line in lines {
        prompt.push_str(&format!("{}: ${:.2}\n", line.item_name, line.price));
    }
    prompt.push('\n');
}

fn push_roster_section(prompt: &mut String, roster: &[String]) {
    if roster.is_empty() {
        return;
    }
    prompt.push_str("The people splitting this bill are: ");
    prompt.push_str(&roster.join(", "));
    prompt.push_str(".\n\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_prompt_carries_items_roster_and_question() {
        let lines = vec![
            BillLine {
                item_name: "Burger".to_string(),
                price: 9.99,
            },
            BillLine {
                item_name: "Fries".to_string(),
                price: 3.25,
            },
        ];
        let roster = vec!["Alice".to_string(), "Bob".to_string()];

        let prompt = question_prompt(&lines, &roster, "Who should pay the most?");

        assert!(prompt.contains("Burger: $9.99"));
        assert!(prompt.contains("Fries: $3.25"));
        assert!(prompt.contains("Alice, Bob"));
        assert!(prompt.contains("User's question: \"Who should pay the most?\""));
    }

    #[test]
    fn empty_roster_is_omitted() {
        let prompt = question_prompt(&[], &[], "What is the total?");
        assert!(!prompt.contains("splitting this bill"));
    }
}
