//! Catalog builder - the fixed six-question interview for a given industry.
//!
//! Two static tables (services-by-industry, call-reasons-by-industry) are
//! built once at process start. Unrecognized industry tags fall back to the
//! general-business table, so catalog construction has no error path.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::choices::{ChoiceOption, ChoicesConfig};
use super::question::{Question, QuestionSlot};

/// Fallback industry tag used when a tag has no dedicated table.
pub const DEFAULT_INDUSTRY: &str = "general_business";

/// Upper bound on simultaneous service selections.
const MAX_SERVICE_SELECTIONS: usize = 5;

/// Upper bound on simultaneous call-reason selections.
const MAX_CALL_REASON_SELECTIONS: usize = 4;

type IndustryTable = HashMap<&'static str, Vec<ChoiceOption>>;

static SERVICES_BY_INDUSTRY: Lazy<IndustryTable> = Lazy::new(|| {
    let mut table = HashMap::new();
    table.insert(
        "tax_accounting",
        vec![
            ChoiceOption::new("tax_prep", "Tax Preparation", "file-text"),
            ChoiceOption::new("bookkeeping", "Bookkeeping", "book"),
            ChoiceOption::new("payroll", "Payroll Services", "dollar-sign"),
            ChoiceOption::new("tax_planning", "Tax Planning", "calendar"),
            ChoiceOption::new("audit_support", "Audit Support", "shield"),
            ChoiceOption::new("business_formation", "Business Formation", "briefcase"),
        ],
    );
    table.insert(
        "dental",
        vec![
            ChoiceOption::new("cleanings", "Cleanings & Checkups", "smile"),
            ChoiceOption::new("fillings", "Fillings", "tool"),
            ChoiceOption::new("whitening", "Teeth Whitening", "sun"),
            ChoiceOption::new("orthodontics", "Orthodontics", "align-center"),
            ChoiceOption::new("implants", "Implants", "anchor"),
            ChoiceOption::new("emergency_care", "Emergency Care", "alert-circle"),
        ],
    );
    table.insert(
        "legal_services",
        vec![
            ChoiceOption::new("consultations", "Legal Consultations", "message-circle"),
            ChoiceOption::new("contracts", "Contract Review", "file-text"),
            ChoiceOption::new("family_law", "Family Law", "users"),
            ChoiceOption::new("estate_planning", "Estate Planning", "home"),
            ChoiceOption::new("business_law", "Business Law", "briefcase"),
            ChoiceOption::new("litigation", "Litigation", "shield"),
        ],
    );
    table.insert(
        "home_services",
        vec![
            ChoiceOption::new("repairs", "Repairs", "tool"),
            ChoiceOption::new("installations", "Installations", "package"),
            ChoiceOption::new("maintenance", "Routine Maintenance", "refresh-cw"),
            ChoiceOption::new("inspections", "Inspections", "search"),
            ChoiceOption::new("emergency_service", "Emergency Service", "alert-circle"),
            ChoiceOption::new("estimates", "Free Estimates", "clipboard"),
        ],
    );
    table.insert(
        "salon_spa",
        vec![
            ChoiceOption::new("haircuts", "Haircuts & Styling", "scissors"),
            ChoiceOption::new("coloring", "Hair Coloring", "droplet"),
            ChoiceOption::new("nails", "Nail Services", "star"),
            ChoiceOption::new("massage", "Massage Therapy", "heart"),
            ChoiceOption::new("facials", "Facials & Skincare", "smile"),
            ChoiceOption::new("waxing", "Waxing", "feather"),
        ],
    );
    table.insert(
        "medical",
        vec![
            ChoiceOption::new("primary_care", "Primary Care Visits", "heart"),
            ChoiceOption::new("preventive_care", "Preventive Care", "shield"),
            ChoiceOption::new("lab_work", "Lab Work", "activity"),
            ChoiceOption::new("vaccinations", "Vaccinations", "plus-circle"),
            ChoiceOption::new("telehealth", "Telehealth Visits", "video"),
            ChoiceOption::new("referrals", "Specialist Referrals", "share"),
        ],
    );
    table.insert(
        DEFAULT_INDUSTRY,
        vec![
            ChoiceOption::new("consultations", "Consultations", "message-circle"),
            ChoiceOption::new("product_sales", "Product Sales", "shopping-bag"),
            ChoiceOption::new("support", "Customer Support", "headphones"),
            ChoiceOption::new("appointments", "Appointments", "calendar"),
            ChoiceOption::new("quotes", "Quotes & Estimates", "clipboard"),
            ChoiceOption::new("deliveries", "Deliveries", "truck"),
        ],
    );
    table
});

static CALL_REASONS_BY_INDUSTRY: Lazy<IndustryTable> = Lazy::new(|| {
    let mut table = HashMap::new();
    table.insert(
        "tax_accounting",
        vec![
            ChoiceOption::new("filing", "Filing a Tax Return", "file-text"),
            ChoiceOption::new("deadlines", "Deadline Questions", "clock"),
            ChoiceOption::new("document_dropoff", "Document Drop-off", "inbox"),
            ChoiceOption::new("refund_status", "Refund Status", "dollar-sign"),
            ChoiceOption::new("new_client", "Becoming a New Client", "user-plus"),
        ],
    );
    table.insert(
        "dental",
        vec![
            ChoiceOption::new("book_appointment", "Booking an Appointment", "calendar"),
            ChoiceOption::new("tooth_pain", "Tooth Pain or Emergency", "alert-circle"),
            ChoiceOption::new("insurance", "Insurance Questions", "shield"),
            ChoiceOption::new("reschedule", "Rescheduling", "refresh-cw"),
            ChoiceOption::new("billing", "Billing Questions", "dollar-sign"),
        ],
    );
    table.insert(
        "legal_services",
        vec![
            ChoiceOption::new("new_case", "Starting a New Case", "folder-plus"),
            ChoiceOption::new("case_status", "Case Status Updates", "activity"),
            ChoiceOption::new("consultation", "Booking a Consultation", "calendar"),
            ChoiceOption::new("document_request", "Document Requests", "file-text"),
            ChoiceOption::new("billing", "Billing Questions", "dollar-sign"),
        ],
    );
    table.insert(
        "home_services",
        vec![
            ChoiceOption::new("schedule_service", "Scheduling a Service Visit", "calendar"),
            ChoiceOption::new("emergency", "Emergency Calls", "alert-circle"),
            ChoiceOption::new("quote_request", "Requesting a Quote", "clipboard"),
            ChoiceOption::new("job_status", "Job Status Updates", "activity"),
            ChoiceOption::new("billing", "Billing Questions", "dollar-sign"),
        ],
    );
    table.insert(
        "salon_spa",
        vec![
            ChoiceOption::new("book_appointment", "Booking an Appointment", "calendar"),
            ChoiceOption::new("reschedule", "Rescheduling", "refresh-cw"),
            ChoiceOption::new("pricing", "Pricing Questions", "dollar-sign"),
            ChoiceOption::new("stylist_availability", "Stylist Availability", "users"),
            ChoiceOption::new("gift_cards", "Gift Cards", "gift"),
        ],
    );
    table.insert(
        "medical",
        vec![
            ChoiceOption::new("book_appointment", "Booking an Appointment", "calendar"),
            ChoiceOption::new("prescription_refill", "Prescription Refills", "plus-circle"),
            ChoiceOption::new("test_results", "Test Results", "activity"),
            ChoiceOption::new("insurance", "Insurance Questions", "shield"),
            ChoiceOption::new("referral", "Referral Requests", "share"),
        ],
    );
    table.insert(
        DEFAULT_INDUSTRY,
        vec![
            ChoiceOption::new("general_inquiry", "General Inquiries", "help-circle"),
            ChoiceOption::new("hours_location", "Hours & Location", "map-pin"),
            ChoiceOption::new("book_appointment", "Booking an Appointment", "calendar"),
            ChoiceOption::new("pricing", "Pricing Questions", "dollar-sign"),
            ChoiceOption::new("complaint", "Complaints & Feedback", "message-square"),
        ],
    );
    table
});

/// Suggested persona names offered on the agent-name question.
const SUGGESTED_AGENT_NAMES: [(&str, &str); 3] =
    [("alex", "Alex"), ("sam", "Sam"), ("riley", "Riley")];

/// Returns the service catalog for an industry, falling back to the
/// general-business table for unrecognized tags.
pub fn services_for_industry(industry: &str) -> &'static [ChoiceOption] {
    SERVICES_BY_INDUSTRY
        .get(industry)
        .or_else(|| SERVICES_BY_INDUSTRY.get(DEFAULT_INDUSTRY))
        .expect("default services table must exist")
}

/// Returns the call-reason catalog for an industry, falling back to the
/// general-business table for unrecognized tags.
pub fn call_reasons_for_industry(industry: &str) -> &'static [ChoiceOption] {
    CALL_REASONS_BY_INDUSTRY
        .get(industry)
        .or_else(|| CALL_REASONS_BY_INDUSTRY.get(DEFAULT_INDUSTRY))
        .expect("default call-reasons table must exist")
}

/// Builds the fixed six-question interview for an industry.
///
/// Total and pure: identical inputs produce identical output, and there is
/// no error path. Known business/agent names surface as convenience options
/// so the user can confirm instead of retyping; absent names are simply
/// omitted.
pub fn build_catalog(
    industry: &str,
    known_business_name: Option<&str>,
    known_agent_name: Option<&str>,
) -> Vec<Question> {
    QuestionSlot::all()
        .iter()
        .map(|&slot| build_slot(slot, industry, known_business_name, known_agent_name))
        .collect()
}

fn build_slot(
    slot: QuestionSlot,
    industry: &str,
    known_business_name: Option<&str>,
    known_agent_name: Option<&str>,
) -> Question {
    let config = match slot {
        QuestionSlot::BusinessName => business_name_config(known_business_name),
        QuestionSlot::AgentName => agent_name_config(known_agent_name),
        QuestionSlot::Services => {
            ChoicesConfig::multi_select(services_for_industry(industry).to_vec())
                .with_other("Another service you offer...")
                .with_max_selections(MAX_SERVICE_SELECTIONS)
        }
        QuestionSlot::Tone => ChoicesConfig::single_select(tone_options())
            .with_other("Describe the tone in your own words..."),
        QuestionSlot::CallReasons => {
            ChoicesConfig::multi_select(call_reasons_for_industry(industry).to_vec())
                .with_other("Another reason people reach out...")
                .with_max_selections(MAX_CALL_REASON_SELECTIONS)
        }
        QuestionSlot::Hours => ChoicesConfig::single_select(hours_options())
            .with_other("Describe your hours..."),
    };

    Question::new(
        slot.question_id(),
        slot.field_key(),
        prompt_for_slot(slot),
        config.with_progress_label(slot.progress_label()),
    )
}

fn business_name_config(known_business_name: Option<&str>) -> ChoicesConfig {
    let mut options = Vec::new();
    if let Some(name) = known_business_name {
        options.push(
            ChoiceOption::new("known_business", name, "building")
                .with_description("The name we have on file"),
        );
    }
    ChoicesConfig::single_select(options).with_other("Type your business name...")
}

fn agent_name_config(known_agent_name: Option<&str>) -> ChoicesConfig {
    let mut options = Vec::new();
    if let Some(name) = known_agent_name {
        options.push(
            ChoiceOption::new("known_agent", name, "user")
                .with_description("The name we have on file"),
        );
    }
    for (id, label) in SUGGESTED_AGENT_NAMES {
        options.push(ChoiceOption::new(id, label, "user"));
    }
    ChoicesConfig::single_select(options).with_other("Type a name for your assistant...")
}

fn tone_options() -> Vec<ChoiceOption> {
    vec![
        ChoiceOption::new("professional", "Professional", "briefcase"),
        ChoiceOption::new("friendly", "Friendly & Warm", "smile"),
        ChoiceOption::new("casual", "Casual & Relaxed", "coffee"),
        ChoiceOption::new("formal", "Formal & Precise", "award"),
    ]
}

fn hours_options() -> Vec<ChoiceOption> {
    vec![
        ChoiceOption::new("mon_fri_9_5", "Monday-Friday, 9am-5pm", "clock"),
        ChoiceOption::new("extended_weekdays", "Weekdays with Extended Hours", "sunrise"),
        ChoiceOption::new("seven_days", "Open Seven Days a Week", "calendar"),
        ChoiceOption::new("around_the_clock", "24/7", "moon"),
    ]
}

fn prompt_for_slot(slot: QuestionSlot) -> &'static str {
    match slot {
        QuestionSlot::BusinessName => "What is the name of your business?",
        QuestionSlot::AgentName => "What should we call your assistant?",
        QuestionSlot::Services => "Which services does your business offer?",
        QuestionSlot::Tone => "How should your assistant sound?",
        QuestionSlot::CallReasons => "Why do people usually contact you?",
        QuestionSlot::Hours => "When is your business open?",
    }
}
