//! Prompt assembly for the AI risk analysis.

use crate::gemini::{InlineData, Part};
use syntria_common::OnboardingSubject;

const DOCUMENT_INSTRUCTIONS: &str = "ANALYZE THE UPLOADED DOCUMENTS BELOW. Look for:\n\
- Insurance coverage amounts and expiry dates\n\
- SOC2/ISO certifications and scope\n\
- Security policies and controls\n\
- Contract terms and liability clauses\n\
- W9 accuracy and completeness\n\
- Any red flags or compliance gaps";

/// Build the multimodal request: the analyst prompt first, then each
/// uploaded file as inline base64 content.
pub fn build_parts(subject: &OnboardingSubject) -> Vec<Part> {
    let mut parts = vec![Part::Text {
        text: analyst_prompt(subject),
    }];

    for file in &subject.uploaded_files {
        parts.push(Part::InlineData {
            inline_data: InlineData {
                mime_type: file
                    .mime_type
                    .clone()
                    .unwrap_or_else(|| "application/pdf".to_string()),
                data: file.base64.clone(),
            },
        });
    }

    parts
}

fn analyst_prompt(subject: &OnboardingSubject) -> String {
    let company_type = subject
        .company_type
        .map(|t| t.to_string())
        .unwrap_or_else(|| "unknown".to_string());
    let checklist = if subject.documents.is_empty() {
        "None".to_string()
    } else {
        subject.documents.join(", ")
    };
    let document_section = if subject.uploaded_files.is_empty() {
        String::new()
    } else {
        format!("\n{DOCUMENT_INSTRUCTIONS}\n")
    };

    format!(
        "You are a risk analyst. Analyze this vendor/client onboarding data and uploaded documents.\n\
        \n\
        Company: {company} ({company_type})\n\
        Country: {country}\n\
        Contact: {contact}\n\
        EIN: {ein}\n\
        Has Security Controls: {controls}\n\
        Handles PII: {pii}\n\
        Document Checklist: {checklist}\n\
        Uploaded Files: {file_count}\n\
        {document_section}\n\
        Return risk level (LOW/MEDIUM/HIGH) and 3-5 specific, actionable reasons based on the documents and data provided.",
        company = subject.company_name,
        country = subject.country,
        contact = subject.contact_email,
        ein = subject.ein,
        controls = if subject.has_controls { "Yes" } else { "No" },
        pii = if subject.has_pii { "Yes" } else { "No" },
        file_count = subject.uploaded_files.len(),
    )
}
