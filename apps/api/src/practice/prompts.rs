// LLM prompt constants for the practice-paper generator.

/// System prompt for practice generation — enforces JSON-only output.
pub const PRACTICE_SYSTEM: &str =
    "You are an experienced exam setter. \
    Write clear, unambiguous practice questions with one correct answer each. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Practice paper prompt template.
/// Replace `{subject}`, `{topic}`, `{difficulty}`, `{question_count}`.
pub const PRACTICE_PROMPT_TEMPLATE: &str = r#"Write a practice paper.

SUBJECT: {subject}
TOPIC: {topic}
DIFFICULTY: {difficulty}
NUMBER OF QUESTIONS: {question_count}

Return a JSON object with this EXACT schema (no extra fields):
{
  "questions": [
    {
      "question": "the question text",
      "options": ["A) ...", "B) ...", "C) ...", "D) ..."],
      "answer": "A",
      "explanation": "why this answer is correct"
    }
  ]
}

Rules:
- Exactly {question_count} questions.
- "options" has exactly four entries labelled A) to D).
- "answer" is the single letter of the correct option.
- Difficulty must match the requested level throughout."#;
