//! The canonical questionnaire: nine sections, seven scored areas.
//!
//! Every scored area carries one Critical (7), two High (5) and one
//! Moderate (3) question, so each area tops out at 20 and the whole
//! catalog at 140. Every scored question also has a zero-score option.

use super::area::{Priority, ScoringArea, Section};
use super::question::{ChoiceOption, Question, QuestionKind};

fn options(choices: &[(&str, u32)]) -> Vec<ChoiceOption> {
    choices
        .iter()
        .map(|(label, score)| ChoiceOption::new(*label, *score))
        .collect()
}

fn scored(
    id: &str,
    section: Section,
    area: ScoringArea,
    priority: Priority,
    answer_key: &str,
    text: &str,
    choices: &[(&str, u32)],
) -> Question {
    Question {
        id: id.to_string(),
        section,
        text: text.to_string(),
        answer_key: answer_key.to_string(),
        kind: QuestionKind::SingleChoice {
            options: options(choices),
        },
        scoring_area: Some(area),
        priority: Some(priority),
        required: true,
        placeholder: None,
    }
}

/// Single-choice question collected for context only.
fn informational(id: &str, answer_key: &str, text: &str, choices: &[(&str, u32)]) -> Question {
    Question {
        id: id.to_string(),
        section: Section::Profile,
        text: text.to_string(),
        answer_key: answer_key.to_string(),
        kind: QuestionKind::SingleChoice {
            options: options(choices),
        },
        scoring_area: None,
        priority: None,
        required: true,
        placeholder: None,
    }
}

fn input(
    id: &str,
    section: Section,
    answer_key: &str,
    kind: QuestionKind,
    text: &str,
    placeholder: Option<&str>,
) -> Question {
    Question {
        id: id.to_string(),
        section,
        text: text.to_string(),
        answer_key: answer_key.to_string(),
        kind,
        scoring_area: None,
        priority: None,
        required: true,
        placeholder: placeholder.map(str::to_string),
    }
}

const EASE_OF_GROWTH_HIGH: &[(&str, u32)] = &[
    ("Very easy", 5),
    ("Fairly easy", 4),
    ("Fairly difficult", 2),
    ("Very difficult", 1),
    ("Impossible", 0),
    ("Unsure", 1),
];

/// Build the canonical question list. `sectors` becomes the option list of
/// the industry sector dropdown.
pub fn questions(sectors: Vec<String>) -> Vec<Question> {
    let mut questions = vec![
        // Your Profile
        informational(
            "q1",
            "ownerRole",
            "What is your primary role in the business?",
            &[
                ("Owner/Founder", 5),
                ("CEO", 4),
                ("Managing Partner", 4),
                ("Investor", 2),
                ("Other", 1),
            ],
        ),
        informational(
            "q2",
            "yearsInvolved",
            "How long have you been involved with this business?",
            &[
                ("Less than 1 year", 1),
                ("1-3 years", 3),
                ("4-7 years", 5),
                ("8-15 years", 4),
                ("Over 15 years", 3),
            ],
        ),
        input(
            "emailCapture",
            Section::Profile,
            "userEmail",
            QuestionKind::Email,
            "Enter your email address. This is crucial for saving your progress and receiving results.",
            Some("your.email@example.com"),
        ),
        input(
            "industrySector",
            Section::Profile,
            "naicsSector",
            QuestionKind::Select { options: sectors },
            "Select your primary Industry Sector:",
            None,
        ),
        Question {
            // Tagged with an area, but a dependent select never scores; the
            // industry effect comes from the adjustment factor instead.
            scoring_area: Some(ScoringArea::Market),
            ..input(
                "industrySubSector",
                Section::Profile,
                "naicsSubSector",
                QuestionKind::DependentSelect {
                    depends_on: "naicsSector".to_string(),
                },
                "Select your specific 6-Digit NAICS Sub-Sector:",
                None,
            )
        },
        informational(
            "q5",
            "businessAge",
            "Approximately how old is the business?",
            &[
                ("0-1 year", 1),
                ("2-3 years", 3),
                ("4-5 years", 4),
                ("6-10 years", 5),
                ("11+ years", 5),
            ],
        ),
    ];

    questions.extend(expansion());
    questions.extend(marketing());
    questions.extend(profitability());
    questions.extend(offering());
    questions.extend(workforce());
    questions.extend(systems());
    questions.extend(market());
    questions.extend(financials());
    questions
}

fn expansion() -> Vec<Question> {
    let s = Section::Expansion;
    let a = ScoringArea::Expansion;
    vec![
        scored(
            "q19",
            s,
            a,
            Priority::Critical,
            "scalabilityVolume",
            "If customers were lined up at your door to buy, would you find delivering FIVE times the current volume of what you sell:",
            &[
                ("Very easy", 7),
                ("Fairly easy", 5),
                ("Fairly difficult", 3),
                ("Very difficult", 1),
                ("Impossible", 0),
                ("Unsure", 1),
            ],
        ),
        scored(
            "q20",
            s,
            a,
            Priority::High,
            "scalabilityGeography",
            "Would replicating your business to serve a new geographical area be:",
            EASE_OF_GROWTH_HIGH,
        ),
        scored(
            "exp3",
            s,
            a,
            Priority::High,
            "expansionPlaybook",
            "Do you have a documented playbook for expanding into new products or markets?",
            &[
                ("Yes, documented and proven on at least one expansion", 5),
                ("Documented but not yet tested", 3),
                ("Informal ideas only", 1),
                ("No", 0),
            ],
        ),
        scored(
            "exp4",
            s,
            a,
            Priority::Moderate,
            "growthPartnerships",
            "Have you assessed partnership or acquisition opportunities to accelerate growth?",
            &[
                ("Yes, we are actively pursuing them", 3),
                ("Identified but not pursued", 2),
                ("Considered informally", 1),
                ("Not considered", 0),
            ],
        ),
    ]
}

fn marketing() -> Vec<Question> {
    let s = Section::Marketing;
    let a = ScoringArea::Marketing;
    vec![
        scored(
            "mkt1",
            s,
            a,
            Priority::Critical,
            "leadGeneration",
            "How would you describe your lead generation process?",
            &[
                ("Systematic, measured and predictable", 7),
                ("Structured but not consistently measured", 5),
                ("Mostly referrals and word of mouth", 3),
                ("Ad hoc", 1),
                ("We have no lead generation process", 0),
            ],
        ),
        scored(
            "q12",
            s,
            a,
            Priority::High,
            "idealClientProfileFocus",
            "Have you identified your Ideal Client Profile?",
            &[
                ("Yes and we strategically decline customers that don't match it.", 5),
                ("Yes but we accept other customers as well.", 3),
                ("No.", 0),
            ],
        ),
        scored(
            "mkt3",
            s,
            a,
            Priority::High,
            "brandRecognition",
            "How well recognized is your brand in your target market?",
            &[
                ("Recognized by most prospects as a market leader", 5),
                ("Well known in our niche", 4),
                ("Known locally or by some prospects", 2),
                ("Little to no recognition", 0),
            ],
        ),
        scored(
            "mkt4",
            s,
            a,
            Priority::Moderate,
            "digitalPresence",
            "How effective is your digital presence (website, search, social)?",
            &[
                ("Optimized and generating measurable leads", 3),
                ("Professional but not generating leads", 2),
                ("Basic or outdated", 1),
                ("No meaningful digital presence", 0),
            ],
        ),
    ]
}

fn profitability() -> Vec<Question> {
    let s = Section::Profitability;
    let a = ScoringArea::Profitability;
    vec![
        scored(
            "prf1",
            s,
            a,
            Priority::Critical,
            "grossMarginPosition",
            "How do your gross margins compare with your industry peers?",
            &[
                ("Well above average", 7),
                ("Slightly above average", 5),
                ("About average", 3),
                ("Below average", 1),
                ("I don't know", 0),
            ],
        ),
        scored(
            "q14",
            s,
            a,
            Priority::High,
            "recurringRevenuePercent",
            "What % of your total revenue is recurring? (Subscriptions, maintenance contracts, etc.)",
            &[
                ("51%-75% or higher", 5),
                ("26-50%", 3),
                ("1-25%", 2),
                ("None", 0),
            ],
        ),
        scored(
            "q15",
            s,
            a,
            Priority::High,
            "upsellRevenueContribution",
            "What best describes your upsell process (revenue after first purchase in 12 months)?",
            &[
                ("The first purchase represents <50% of revenue received from that customer in the first 12 months", 5),
                ("The first purchase represents >50% but <75% of revenue received from that customer in the first 12 months", 3),
                ("The first purchase represents >75% of revenue received from that customer in the first 12 months", 2),
                ("Usually there is no other purchase from that customer in the first 12 months", 0),
            ],
        ),
        scored(
            "prf4",
            s,
            a,
            Priority::Moderate,
            "financialForecasting",
            "How rigorous is your financial planning and forecasting?",
            &[
                ("Rolling forecasts reviewed monthly against actuals", 3),
                ("Annual budget reviewed periodically", 2),
                ("Informal budgeting", 1),
                ("No budgeting or forecasting", 0),
            ],
        ),
    ]
}

fn offering() -> Vec<Question> {
    let s = Section::Offering;
    let a = ScoringArea::Offering;
    vec![
        scored(
            "q6",
            s,
            a,
            Priority::Critical,
            "productUniqueness",
            "How would you describe the uniqueness of your core product/service?",
            &[
                ("Highly unique, patented/proprietary", 7),
                ("Significantly differentiated", 5),
                ("Some unique features", 3),
                ("Similar to competitors", 1),
                ("Commodity product/service", 0),
            ],
        ),
        scored(
            "q13",
            s,
            a,
            Priority::High,
            "customerSatisfactionLevel",
            "Please estimate the percentage of your customers that are very satisfied with your main service/product:",
            &[
                ("More than 75% are very satisfied", 5),
                ("51-75% are very satisfied", 4),
                ("25-50% are very satisfied", 2),
                ("Less than 25% are very satisfied", 1),
                ("I'm not sure, we don't measure this.", 0),
            ],
        ),
        scored(
            "off3",
            s,
            a,
            Priority::High,
            "qualityAssurance",
            "What quality assurance systems support your product/service?",
            &[
                ("Formal QA system with metrics and continuous improvement", 5),
                ("Documented checks applied consistently", 3),
                ("Informal checks", 1),
                ("No quality assurance process", 0),
            ],
        ),
        scored(
            "off4",
            s,
            a,
            Priority::Moderate,
            "satisfactionMeasurement",
            "How do you measure customer satisfaction?",
            &[
                ("Net Promoter Score or similar, tracked regularly", 3),
                ("Periodic surveys", 2),
                ("Anecdotal feedback only", 1),
                ("We don't collect feedback", 0),
            ],
        ),
    ]
}

fn workforce() -> Vec<Question> {
    let s = Section::Workforce;
    let a = ScoringArea::Workforce;
    vec![
        scored(
            "q8",
            s,
            a,
            Priority::Critical,
            "ownerReliance",
            "How reliant is the business's day-to-day operation on the owner?",
            &[
                ("Completely reliant (owner does most things)", 0),
                ("Heavily reliant (owner involved in key decisions daily)", 1),
                ("Moderately reliant (owner oversees, team manages)", 3),
                ("Minimally reliant (owner focuses on strategy)", 5),
                ("Not reliant (fully managed by team)", 7),
            ],
        ),
        scored(
            "wf2",
            s,
            a,
            Priority::High,
            "managementTeam",
            "How strong is your management team below the owner?",
            &[
                ("A complete team that runs the business without me", 5),
                ("Key roles filled, with some gaps", 3),
                ("One or two capable managers", 1),
                ("No management layer", 0),
            ],
        ),
        scored(
            "wf3",
            s,
            a,
            Priority::High,
            "roleAccountability",
            "Do team members have clear roles and KPIs they are accountable for?",
            &[
                ("Yes, for every role", 5),
                ("For most roles", 3),
                ("For a few key roles", 1),
                ("No", 0),
            ],
        ),
        scored(
            "wf4",
            s,
            a,
            Priority::Moderate,
            "employeeRetention",
            "How would you describe employee retention and development?",
            &[
                ("Low turnover with structured development programs", 3),
                ("Low turnover, informal development", 2),
                ("Moderate turnover", 1),
                ("High turnover", 0),
            ],
        ),
    ]
}

fn systems() -> Vec<Question> {
    let s = Section::Systems;
    let a = ScoringArea::Systems;
    vec![
        scored(
            "q9",
            s,
            a,
            Priority::Critical,
            "processDocumentation",
            "How well documented are your core business processes?",
            &[
                ("Not documented", 0),
                ("Some processes documented informally", 1),
                ("Key processes documented", 3),
                ("Most processes documented and followed", 5),
                ("All core processes documented, reviewed, and optimized", 7),
            ],
        ),
        scored(
            "sys2",
            s,
            a,
            Priority::High,
            "technologyAdoption",
            "How well does technology (CRM, ERP, automation) support your operations?",
            &[
                ("Integrated systems across the business", 5),
                ("Core systems in place", 3),
                ("Spreadsheets and disconnected tools", 1),
                ("Mostly manual", 0),
            ],
        ),
        scored(
            "sys3",
            s,
            a,
            Priority::High,
            "kpiTracking",
            "Do you track key performance indicators for the business?",
            &[
                ("Live dashboard reviewed weekly", 5),
                ("Reviewed monthly", 3),
                ("Tracked occasionally", 1),
                ("Not tracked", 0),
            ],
        ),
        scored(
            "sys4",
            s,
            a,
            Priority::Moderate,
            "processReview",
            "How often are your core processes reviewed for efficiency?",
            &[
                ("Continuously, with an owner for each process", 3),
                ("Annually", 2),
                ("Only when something breaks", 1),
                ("Never", 0),
            ],
        ),
    ]
}

fn market() -> Vec<Question> {
    let s = Section::Market;
    let a = ScoringArea::Market;
    vec![
        scored(
            "q7",
            s,
            a,
            Priority::Critical,
            "customerConcentration",
            "How concentrated is your customer base?",
            &[
                ("Top customer is >50% of revenue", 0),
                ("Top customer is 25-50% of revenue", 1),
                ("Top 5 customers are >50% of revenue", 3),
                ("No single customer is >10% of revenue", 5),
                ("Highly diversified customer base", 7),
            ],
        ),
        scored(
            "mk2",
            s,
            a,
            Priority::High,
            "competitiveDifferentiation",
            "How defensible is your position against competitors?",
            &[
                ("Clear, durable advantages competitors can't easily copy", 5),
                ("Some advantages", 3),
                ("We compete mainly on price", 1),
                ("No clear advantage", 0),
            ],
        ),
        scored(
            "mk3",
            s,
            a,
            Priority::High,
            "marketResilience",
            "How did your business perform through the last economic downturn or disruption?",
            &[
                ("Grew", 5),
                ("Held steady", 3),
                ("Declined but recovered", 2),
                ("Declined significantly", 0),
            ],
        ),
        scored(
            "mk4",
            s,
            a,
            Priority::Moderate,
            "marketDemandTrend",
            "How is demand in your core market trending?",
            &[
                ("Growing quickly", 3),
                ("Growing steadily", 2),
                ("Flat", 1),
                ("Declining", 0),
            ],
        ),
    ]
}

fn financials() -> Vec<Question> {
    let s = Section::Financials;
    vec![
        input(
            "finRev",
            s,
            "currentRevenue",
            QuestionKind::Number,
            "What is your approximate Last Full Year Revenue?",
            Some("e.g., 1500000"),
        ),
        Question {
            required: false,
            ..input(
                "finGP",
                s,
                "grossProfit",
                QuestionKind::Number,
                "What is your approximate Last Full Year Gross Profit?",
                Some("e.g., 900000"),
            )
        },
        input(
            "finEBITDA",
            s,
            "ebitda",
            QuestionKind::Number,
            "What is your approximate Last Full Year EBITDA (Earnings Before Interest, Taxes, Depreciation, Amortization)?",
            Some("e.g., 300000"),
        ),
        Question {
            required: false,
            ..input(
                "finAdj",
                s,
                "ebitdaAdjustments",
                QuestionKind::Number,
                "What are your typical annual EBITDA Add-backs / Adjustments? (e.g., owner's excess salary, non-recurring expenses)",
                Some("e.g., 50000 (can be 0)"),
            )
        },
    ]
}
