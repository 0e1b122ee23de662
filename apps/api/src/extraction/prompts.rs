// All prompt templates for the Extraction module.
// Placeholders are filled with `llm_client::prompts::render`.

/// Job extraction. Replace: {page_data}, {json_only}
pub const EXTRACT_JOBS_TEMPLATE: &str = r#"### SCRAPED TEXT FROM WEBSITE:
{page_data}

### INSTRUCTION:
The scraped text is from the careers page of a website.
Your job is to extract the job postings and return them as a JSON array of objects with
exactly these keys: `role`, `experience`, `skills` and `description`.
`skills` must be an array of strings. Every other value must be a string.
{json_only}

### VALID JSON (NO PREAMBLE):"#;

/// Resume suggestions. Replace: {resume_content}, {job_description}, {json_only}
pub const SUGGESTIONS_TEMPLATE: &str = r#"### RESUME CONTENT:
{resume_content}

### JOB DESCRIPTION:
{job_description}

### INSTRUCTION:
Identify areas in the resume that can be improved to better match the job description.
For each suggestion, provide the following:
- original_text: The text from the resume.
- suggested_improvement: The modified text.
- reason: Why this change is beneficial.

Return the suggestions as a JSON array of objects with those three keys.
{json_only}

### OUTPUT (JSON FORMAT):"#;

/// Matched summary. Replace: {job_description}, {resume_content}
pub const MATCH_SUMMARY_TEMPLATE: &str = r#"### JOB DESCRIPTION:
{job_description}

### RESUME CONTENT:
{resume_content}

### INSTRUCTION:
Compare the job description to the resume content. Extract and highlight key matching
experiences and skills that align with the job description.
Return the comparison in a concise bullet point format.

### MATCHED SUMMARY (NO PREAMBLE):"#;

/// Cold email. Replace: {job_description}, {matched_resume}, {link_list}
pub const EMAIL_TEMPLATE: &str = r#"### JOB DESCRIPTION:
{job_description}

### MATCHED RESUME SUMMARY:
{matched_resume}

### INSTRUCTION:
You are an individual looking to apply for the job mentioned above.
Write a personalized cold email to the employer describing how your skills and experience
align with their job posting, referencing the matched resume summary where appropriate.
Add any links or portfolio items from the following list to strengthen your application:
{link_list}
Remember to be professional and concise.
Do not provide a preamble.

### EMAIL (NO PREAMBLE):"#;
