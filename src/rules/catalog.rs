//! Static rule table data.
//!
//! Patterns are bilingual (Hebrew + English). Each group builder returns its
//! rules in declaration order; `build_catalog` concatenates the groups into
//! the single loaded-once table.

use crate::models::Severity::{Critical, High, Low, Medium};

use super::{Rule, RuleGroup};

fn profanity_hebrew() -> Vec<Rule> {
    let g = RuleGroup::ProfanityHebrew;
    vec![
        Rule::new(g, r"(?i)\b(זונה|זונות)\b", High, 0.95, None),
        Rule::new(g, r"(?i)\b(כוסעמק|כוס אמק|כוס עמק)\b", Critical, 0.98, None),
        Rule::new(g, r"(?i)\b(בן זונה|בן של זונה)\b", High, 0.95, None),
        Rule::new(g, r"(?i)\b(מניאק|מניאקים)\b", Medium, 0.85, None),
        Rule::new(g, r"(?i)\b(חרא|חארה)\b", High, 0.90, None),
        Rule::new(g, r"(?i)\b(שרמוטה|שרמוטות)\b", High, 0.95, None),
        Rule::new(g, r"(?i)\b(דפוק|דפוקה|דפוקים)\b", Medium, 0.80, None),
        Rule::new(g, r"(?i)\b(זיין|זיינתי|לזיין)\b", High, 0.90, None),
        Rule::new(g, r"(?i)\b(מזדיין|מזדיינת)\b", High, 0.90, None),
        Rule::new(g, r"(?i)\b(לעזאזל|לכל הרוחות)\b", Medium, 0.75, None),
        Rule::new(g, r"(?i)\b(אידיוט|אידיוטים)\b", Low, 0.70, None),
        Rule::new(g, r"(?i)\b(טמבל|טמבלה|טמבלים)\b", Low, 0.70, None),
        Rule::new(g, r"(?i)\b(מפגר|מפגרת|מפגרים)\b", High, 0.85, None),
        Rule::new(g, r"(?i)\b(דביל|דבילה|דבילים)\b", Medium, 0.75, None),
        Rule::new(g, r"(?i)\b(חמור|חמורה|חמורים)\b", Low, 0.65, None),
        Rule::new(g, r"(?i)\b(סתום|סתומה) (תפה|פה)\b", Medium, 0.80, None),
        Rule::new(g, r"(?i)\b(לך תזדיין|לכי תזדייני)\b", Critical, 0.95, None),
        Rule::new(g, r"(?i)\b(יא (אפס|מפגר|דביל))\b", Medium, 0.85, None),
        Rule::new(g, r"(?i)\b(לך תמות|לכי תמותי)\b", Critical, 0.98, None),
        Rule::new(g, r"(?i)\b(ערס|ערסים)\b", Medium, 0.75, None),
    ]
}

fn profanity_english() -> Vec<Rule> {
    let g = RuleGroup::ProfanityEnglish;
    vec![
        Rule::new(g, r"(?i)\b(fuck|fucking|fucked)\b", High, 0.95, None),
        Rule::new(g, r"(?i)\b(shit|shitty|bullshit)\b", High, 0.90, None),
        Rule::new(g, r"(?i)\b(bitch|bitches)\b", High, 0.90, None),
        Rule::new(g, r"(?i)\b(asshole|assholes)\b", High, 0.90, None),
        Rule::new(g, r"(?i)\b(bastard|bastards)\b", Medium, 0.80, None),
        Rule::new(g, r"(?i)\b(damn|damned)\b", Low, 0.60, None),
        Rule::new(g, r"(?i)\b(hell|hells)\b", Low, 0.55, None),
        Rule::new(g, r"(?i)\b(crap|crappy)\b", Medium, 0.70, None),
        Rule::new(g, r"(?i)\b(piss|pissed)\b", Medium, 0.75, None),
        Rule::new(g, r"(?i)\b(dick|dickhead)\b", High, 0.85, None),
        Rule::new(g, r"(?i)\b(cunt|cunts)\b", Critical, 0.98, None),
        Rule::new(g, r"(?i)\b(whore|whores)\b", High, 0.90, None),
        Rule::new(g, r"(?i)\b(slut|sluts)\b", High, 0.90, None),
        Rule::new(g, r"(?i)\b(moron|morons)\b", Low, 0.70, None),
        Rule::new(g, r"(?i)\b(idiot|idiots|idiotic)\b", Low, 0.65, None),
        Rule::new(g, r"(?i)\b(stupid|stupidity)\b", Low, 0.60, None),
        Rule::new(g, r"(?i)\b(dumb|dumbass)\b", Medium, 0.70, None),
        Rule::new(g, r"(?i)\b(retard|retarded)\b", High, 0.85, None),
        Rule::new(g, r"(?i)shut the (fuck|hell) up", High, 0.90, None),
        Rule::new(g, r"(?i)go to hell", Medium, 0.75, None),
    ]
}

fn misleading_health() -> Vec<Rule> {
    let g = RuleGroup::MisleadingHealth;
    vec![
        Rule::new(g, r"(?i)cure(s)? (cancer|aids|diabetes) (instantly|overnight|in \d+ days)", Critical, 0.95, Some("miracle_cure")),
        Rule::new(g, r"(?i)(natural|herbal) (cure|remedy) for (all|any) diseases?", Critical, 0.90, Some("miracle_cure")),
        Rule::new(g, r"(?i)doctor(s)? (hate|don't want you to know) (this|about)", High, 0.85, Some("conspiracy")),
        Rule::new(g, r"(?i)lose \d+ (pounds|kg) in \d+ days (without|no) (exercise|diet)", High, 0.90, Some("weight_loss_scam")),
        Rule::new(g, r"(?i)this (one|simple) (trick|method) (cures|eliminates)", High, 0.85, Some("clickbait_health")),
        Rule::new(g, r"(?i)vaccine(s)? (cause|causes) (autism|cancer|death)", Critical, 0.95, Some("anti_vax_misinfo")),
        Rule::new(g, r"(?i)covid.{0,20}(hoax|fake|scam)", Critical, 0.90, Some("covid_misinfo")),
        Rule::new(g, r"(?i)5g (causes|spreads|creates) (coronavirus|covid|cancer)", Critical, 0.95, Some("tech_health_misinfo")),
        Rule::new(g, r"(?i)drinking (bleach|disinfectant) (cures|treats)", Critical, 0.98, Some("dangerous_advice")),
        Rule::new(g, r"(?i)(FDA|CDC) (hiding|suppressing) (the truth|information) about", High, 0.85, Some("conspiracy")),
    ]
}

fn misleading_financial() -> Vec<Rule> {
    let g = RuleGroup::MisleadingFinancial;
    vec![
        Rule::new(g, r"(?i)guaranteed (profit|return|income) of \d+%", Critical, 0.95, Some("investment_scam")),
        Rule::new(g, r"(?i)make \$\d+[,\d]* (per day|daily|every day) (from home|online)", Critical, 0.90, Some("get_rich_quick")),
        Rule::new(g, r"(?i)no (risk|investment|experience) required.*make money", High, 0.85, Some("too_good_to_be_true")),
        Rule::new(g, r"(?i)government (grants?|money) you (didn't know|qualify for)", High, 0.85, Some("grant_scam")),
        Rule::new(g, r"(?i)secret (formula|system|method) (wall street|banks) don't want", High, 0.90, Some("financial_conspiracy")),
        Rule::new(g, r"(?i)turn \$\d+ into \$\d+[,\d]* in (days|weeks|month)", Critical, 0.95, Some("ponzi_scheme")),
        Rule::new(g, r"(?i)(bitcoin|crypto) (mining|trading) bot (guaranteed|automatic) profits", High, 0.90, Some("crypto_scam")),
        Rule::new(g, r"(?i)pay (me|us) \$\d+ (first|now|upfront) (to receive|and get)", Critical, 0.95, Some("advance_fee_fraud")),
        Rule::new(g, r"(?i)nigerian prince", Critical, 0.99, Some("classic_scam")),
        Rule::new(g, r"(?i)inheritance.*million.*unclaimed", Critical, 0.95, Some("inheritance_scam")),
    ]
}

fn misleading_conspiracy() -> Vec<Rule> {
    let g = RuleGroup::MisleadingConspiracy;
    vec![
        Rule::new(g, r"(?i)(flat earth|earth is flat)", High, 0.90, Some("science_denial")),
        Rule::new(g, r"(?i)moon landing (was )?faked?", High, 0.85, Some("historical_denial")),
        Rule::new(g, r"(?i)(illuminati|freemasons?) control(s)? (the world|everything)", Medium, 0.75, Some("conspiracy_theory")),
        Rule::new(g, r"(?i)chemtrails? (are|is) (poisoning|controlling)", High, 0.85, Some("pseudoscience")),
        Rule::new(g, r"(?i)government (is )?(hiding|covering up) (aliens|ufos)", Medium, 0.70, Some("conspiracy_theory")),
        Rule::new(g, r"(?i)holocaust (never happened|was (fake|exaggerated))", Critical, 0.98, Some("hate_speech")),
        Rule::new(g, r"(?i)9/11 was an inside job", High, 0.85, Some("conspiracy_theory")),
        Rule::new(g, r"(?i)new world order.*secret cabal", Medium, 0.75, Some("conspiracy_theory")),
        Rule::new(g, r"(?i)bill gates.*microchip.*vaccine", High, 0.90, Some("covid_conspiracy")),
        Rule::new(g, r"(?i)qanon|pizzagate", High, 0.90, Some("conspiracy_movement")),
    ]
}

fn manipulation_urgency() -> Vec<Rule> {
    let g = RuleGroup::ManipulationUrgency;
    vec![
        Rule::new(g, r"(?i)(offer|deal) expires? (in|within) \d+ (minutes?|hours?)", High, 0.85, Some("artificial_urgency")),
        Rule::new(g, r"(?i)only \d+ (spots?|seats?|places?) (left|remaining|available)", High, 0.85, Some("false_scarcity")),
        Rule::new(g, r"(?i)act (now|immediately|fast) (or|before) (you )?(miss|lose)", High, 0.80, Some("pressure_tactic")),
        Rule::new(g, r"(?i)last chance (to|for)", Medium, 0.75, Some("fomo")),
        Rule::new(g, r"(?i)time is running out", Medium, 0.75, Some("artificial_urgency")),
        Rule::new(g, r"(?i)limited time (offer|deal|special)", Medium, 0.70, Some("sales_pressure")),
        Rule::new(g, r"(?i)this (offer|deal) won't last", Medium, 0.70, Some("fomo")),
        Rule::new(g, r"(?i)don't wait.*will be gone", Medium, 0.75, Some("pressure_tactic")),
        Rule::new(g, r"(?i)(hurry|rush).*before.*too late", Medium, 0.75, Some("urgency_manipulation")),
        Rule::new(g, r"(?i)clock is ticking", Low, 0.65, Some("time_pressure")),
    ]
}

fn manipulation_emotional() -> Vec<Rule> {
    let g = RuleGroup::ManipulationEmotional;
    vec![
        Rule::new(g, r"(?i)if you (really )?loved? me", High, 0.85, Some("emotional_blackmail")),
        Rule::new(g, r"(?i)you (should|must) feel (guilty|ashamed|bad) (about|for)", High, 0.90, Some("guilt_tripping")),
        Rule::new(g, r"(?i)(everyone|nobody|no one) (else )?(thinks|believes|knows)", Medium, 0.75, Some("social_pressure")),
        Rule::new(g, r"(?i)you'?re (crazy|paranoid|overreacting|imagining things)", High, 0.90, Some("gaslighting")),
        Rule::new(g, r"(?i)you (owe|should do this for) me", High, 0.85, Some("obligation_manipulation")),
        Rule::new(g, r"(?i)after (all|everything) I('ve| have) done for you", High, 0.85, Some("guilt_tripping")),
        Rule::new(g, r"(?i)you('re| are) (so|being) selfish", Medium, 0.75, Some("shame_tactic")),
        Rule::new(g, r"(?i)real (friends?|partners?) would", Medium, 0.75, Some("relationship_manipulation")),
        Rule::new(g, r"(?i)you('re| are) (the only one|alone) who (thinks|believes)", Medium, 0.75, Some("isolation_tactic")),
        Rule::new(g, r"(?i)trust me.*I know what's best for you", Medium, 0.80, Some("control_tactic")),
    ]
}

fn manipulation_social() -> Vec<Rule> {
    let g = RuleGroup::ManipulationSocial;
    vec![
        Rule::new(g, r"(?i)(everyone|everybody) is (doing|buying|using) (this|it)", Medium, 0.75, Some("bandwagon_effect")),
        Rule::new(g, r"(?i)you don't want to be (the only one|left out)", Medium, 0.75, Some("fomo_social")),
        Rule::new(g, r"(?i)all your friends (have|are)", Medium, 0.70, Some("peer_pressure")),
        Rule::new(g, r"(?i)popular (people|kids|influencers) (use|love|recommend)", Medium, 0.70, Some("social_proof_manipulation")),
        Rule::new(g, r"(?i)join \d+[,\d]* (others|people|members) who", Low, 0.65, Some("crowd_following")),
        Rule::new(g, r"(?i)(don't|do not) be (left behind|the last one)", Medium, 0.75, Some("exclusion_fear")),
        Rule::new(g, r"(?i)exclusive (club|group|community) for", Low, 0.60, Some("exclusivity_manipulation")),
        Rule::new(g, r"(?i)you('re| are) (not|missing out on) what everyone else", Medium, 0.70, Some("fomo_social")),
    ]
}

fn scam_phishing() -> Vec<Rule> {
    let g = RuleGroup::ScamPhishing;
    vec![
        Rule::new(g, r"(?i)your account (has been|will be|was) (suspended|locked|closed|terminated)", Critical, 0.95, Some("account_threat")),
        Rule::new(g, r"(?i)verify your (account|identity|information|credentials) (immediately|now|within)", Critical, 0.95, Some("credential_theft")),
        Rule::new(g, r"(?i)unusual (activity|login|sign-in) detected (on|in) your", Critical, 0.90, Some("fake_security_alert")),
        Rule::new(g, r"(?i)confirm your (email|password|payment|credit card)", Critical, 0.90, Some("credential_phishing")),
        Rule::new(g, r"(?i)update your (payment|billing) (information|details) (immediately|now)", Critical, 0.95, Some("payment_phishing")),
        Rule::new(g, r"(?i)click (here|this link|below) (immediately|now|to verify)", Critical, 0.90, Some("phishing_link")),
        Rule::new(g, r"(?i)your (paypal|bank|amazon|netflix) account.*verify", Critical, 0.95, Some("brand_impersonation")),
        Rule::new(g, r"(?i)security (alert|warning|notification).*confirm (your|identity)", Critical, 0.90, Some("fake_alert")),
        Rule::new(g, r"(?i)package (delivery|shipment) failed.*confirm address", High, 0.85, Some("delivery_scam")),
        Rule::new(g, r"(?i)you('ve| have) won.*claim (your prize|now)", Critical, 0.95, Some("prize_scam")),
    ]
}

fn scam_impersonation() -> Vec<Rule> {
    let g = RuleGroup::ScamImpersonation;
    vec![
        Rule::new(g, r"(?i)(IRS|tax authority|revenue service).*owe.*pay immediately", Critical, 0.95, Some("government_impersonation")),
        Rule::new(g, r"(?i)tech support.*your (computer|pc|device) (is )?infected", Critical, 0.95, Some("tech_support_scam")),
        Rule::new(g, r"(?i)microsoft.*detected (virus|malware|threat)", Critical, 0.90, Some("tech_impersonation")),
        Rule::new(g, r"(?i)(police|fbi|interpol).*warrant.*pay (fine|fee)", Critical, 0.98, Some("law_enforcement_scam")),
        Rule::new(g, r"(?i)grandson|granddaughter.*in (trouble|jail|hospital).*send money", Critical, 0.95, Some("grandparent_scam")),
        Rule::new(g, r"(?i)romance.*love you.*need money.*emergency", Critical, 0.95, Some("romance_scam")),
        Rule::new(g, r"(?i)social security (number|benefits?).*suspended", Critical, 0.95, Some("ssn_scam")),
        Rule::new(g, r"(?i)charity.*donation.*tax deductible.*urgent", High, 0.80, Some("fake_charity")),
    ]
}

fn dangerous_violence() -> Vec<Rule> {
    let g = RuleGroup::DangerousViolence;
    vec![
        Rule::new(g, r"(?i)how to (make|build|create) (a )?(bomb|explosive|weapon)", Critical, 0.98, Some("weapon_instructions")),
        Rule::new(g, r"(?i)(homemade|diy) (bomb|explosive|grenade)", Critical, 0.98, Some("explosive_guide")),
        Rule::new(g, r"(?i)where to (buy|get|find) (illegal )?(guns?|weapons?|firearms?)", Critical, 0.90, Some("illegal_weapons")),
        Rule::new(g, r"(?i)how to (kill|murder|assassinate) (someone|a person)", Critical, 0.98, Some("violence_instruction")),
        Rule::new(g, r"(?i)poison (recipe|formula|mixture)", Critical, 0.95, Some("poison_guide")),
        Rule::new(g, r"(?i)how to (commit|plan) (a )?(mass shooting|school shooting)", Critical, 0.99, Some("mass_violence")),
    ]
}

fn dangerous_self_harm() -> Vec<Rule> {
    let g = RuleGroup::DangerousSelfHarm;
    vec![
        Rule::new(g, r"(?i)suicide (method|instruction|guide|how to)", Critical, 0.98, Some("suicide_content")),
        Rule::new(g, r"(?i)painless way(s)? to (die|kill myself|end (it|life))", Critical, 0.98, Some("suicide_method")),
        Rule::new(g, r"(?i)how to (cut|harm) myself", Critical, 0.95, Some("self_harm_guide")),
        Rule::new(g, r"(?i)(best|easiest) way to commit suicide", Critical, 0.98, Some("suicide_encouragement")),
        Rule::new(g, r"(?i)life (is not|isn't) worth living", High, 0.85, Some("suicide_ideation")),
    ]
}

fn dangerous_illegal() -> Vec<Rule> {
    let g = RuleGroup::DangerousIllegal;
    vec![
        Rule::new(g, r"(?i)how to (hack|crack|break into) (a )?(account|system|network)", Critical, 0.95, Some("hacking_guide")),
        Rule::new(g, r"(?i)steal (credit card|password|identity|data)", Critical, 0.95, Some("theft_instruction")),
        Rule::new(g, r"(?i)how to (cook|make|produce) (meth|drugs|narcotics)", Critical, 0.98, Some("drug_manufacturing")),
        Rule::new(g, r"(?i)(buy|sell|trade) (illegal )?(drugs|narcotics|cocaine|heroin)", Critical, 0.90, Some("drug_trafficking")),
        Rule::new(g, r"(?i)fake (id|passport|driver'?s license)", Critical, 0.95, Some("document_forgery")),
        Rule::new(g, r"(?i)how to (avoid|evade) (paying )?taxes", High, 0.85, Some("tax_evasion")),
        Rule::new(g, r"(?i)money laundering (technique|method|how to)", Critical, 0.95, Some("financial_crime")),
    ]
}

pub(super) fn build_catalog() -> Vec<Rule> {
    let mut rules = Vec::new();
    rules.extend(profanity_hebrew());
    rules.extend(profanity_english());
    rules.extend(misleading_health());
    rules.extend(misleading_financial());
    rules.extend(misleading_conspiracy());
    rules.extend(manipulation_urgency());
    rules.extend(manipulation_emotional());
    rules.extend(manipulation_social());
    rules.extend(scam_phishing());
    rules.extend(scam_impersonation());
    rules.extend(dangerous_violence());
    rules.extend(dangerous_self_harm());
    rules.extend(dangerous_illegal());
    rules
}
