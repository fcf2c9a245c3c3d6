use super::{Template, TemplateId};
use crate::models::Tone;

pub(super) fn lookup(id: TemplateId) -> &'static Template {
    match id {
        TemplateId::ExamCost => &EXAM_COST,
        TemplateId::ExamFormat => &EXAM_FORMAT,
        TemplateId::FocusBeginner => &FOCUS_BEGINNER,
        TemplateId::FocusDeveloping => &FOCUS_DEVELOPING,
        TemplateId::FocusAdvanced => &FOCUS_ADVANCED,
        TemplateId::MockExamReady => &MOCK_EXAM_READY,
        TemplateId::TrafficLights => &TRAFFIC_LIGHTS,
        TemplateId::PriorityRules => &PRIORITY_RULES,
        TemplateId::SpeedLimits => &SPEED_LIMITS,
        TemplateId::Roundabouts => &ROUNDABOUTS,
        TemplateId::Booking => &BOOKING,
        TemplateId::Preparation => &PREPARATION,
        TemplateId::Difficulty => &DIFFICULTY,
        TemplateId::Results => &RESULTS,
        TemplateId::HelpBeginner => &HELP_BEGINNER,
        TemplateId::HelpDeveloping => &HELP_DEVELOPING,
        TemplateId::HelpAdvanced => &HELP_ADVANCED,
        TemplateId::Greeting => &GREETING,
        TemplateId::Thanks => &THANKS,
        TemplateId::Overview => &OVERVIEW,
    }
}

const EXAM_COST: Template = Template {
    tone: Tone::Analytical,
    message: "The CBR car theory exam (category B) costs €37.50 when you book it online.\n\n\
              A few things to keep in mind:\n\
              - An extended exam with extra time costs more.\n\
              - An exam with a spoken translation or interpreter has a separate rate.\n\
              - If you cancel or reschedule too late you pay the fee again.",
    action_items: &[
        "Book your theory exam online via Mijn CBR with your DigiD",
        "Check the current rates on the CBR website before paying",
    ],
    next_steps: &[
        "Pick a date that leaves at least two weeks of practice",
        "Take a full mock exam before the real one",
    ],
};

const EXAM_FORMAT: Template = Template {
    tone: Tone::Analytical,
    message: "The CBR theory exam has 65 questions in three parts and takes about 30 minutes:\n\n\
              1. Hazard perception: 25 questions, you need 13 correct.\n\
              2. Knowledge of rules: 12 questions, you need 10 correct.\n\
              3. Insight: 28 questions, you need 25 correct.\n\n\
              You must pass every part. Hazard perception questions are timed, so answer quickly.",
    action_items: &[
        "Practise hazard perception under a time limit",
        "Memorise the pass mark of each part",
    ],
    next_steps: &[
        "Do one practice round per exam part",
        "Review every wrong answer and its explanation",
    ],
};

const FOCUS_BEGINNER: Template = Template {
    tone: Tone::Supportive,
    message: "Your average is {score}%, so let's build a solid foundation first.\n\n\
              Start with the basics: road signs, priority rules and traffic lights. \
              These come back in almost every exam question.",
    action_items: &[
        "Study the most common road signs",
        "Learn the priority-to-the-right rule",
        "Do the traffic lights practice set",
    ],
    next_steps: &[
        "Retake one short quiz each day",
        "Ask me about any rule that feels unclear",
    ],
};

const FOCUS_DEVELOPING: Template = Template {
    tone: Tone::Encouraging,
    message: "You're at {score}%, about {gap} points below the 70% mark.\n\n\
              Focus on your weakest subject and on hazard perception, \
              that is where most points are lost.",
    action_items: &[
        "Redo the subject with your lowest score",
        "Practise hazard perception with a timer",
    ],
    next_steps: &[
        "Aim for 70% on every practice set",
        "Start mixing subjects once you pass them one by one",
    ],
};

const FOCUS_ADVANCED: Template = Template {
    tone: Tone::Motivational,
    message: "Great work, your average is {score}%!\n\n\
              Now focus on speed and consistency: full mock exams under exam conditions \
              and the tricky insight questions.",
    action_items: &[
        "Take a full 65-question mock exam",
        "Review the insight questions you got wrong",
    ],
    next_steps: &[
        "Book your exam once you pass three mock exams in a row",
    ],
};

const MOCK_EXAM_READY: Template = Template {
    tone: Tone::Motivational,
    message: "With an average of {score}% you are ready for a full mock exam!\n\n\
              Treat it like the real thing: no breaks, no looking things up, \
              and keep to the time limit.",
    action_items: &[
        "Take a full mock exam now",
        "Note every question you hesitated on",
    ],
    next_steps: &[
        "Book the real exam if you pass the mock exam twice",
        "Keep your streak going with a short quiz each day",
    ],
};

const TRAFFIC_LIGHTS: Template = Template {
    tone: Tone::Analytical,
    message: "Traffic lights in short:\n\n\
              - Red: stop before the stop line.\n\
              - Amber: stop, unless you are too close to stop safely.\n\
              - Green: go, but only if you can clear the junction.\n\
              - Flashing amber: the lights are off, normal priority rules and signs apply.\n\n\
              Instructions from a traffic controller always override the lights.",
    action_items: &[
        "Do the traffic lights practice set",
        "Learn what green arrows release",
    ],
    next_steps: &[
        "Combine traffic lights with the priority rules quiz",
    ],
};

const PRIORITY_RULES: Template = Template {
    tone: Tone::Analytical,
    message: "Priority rules in order of precedence:\n\n\
              1. Traffic controllers.\n\
              2. Traffic lights.\n\
              3. Traffic signs and shark teeth.\n\
              4. General rule: traffic from the right has priority.\n\n\
              Trams always have priority over other traffic at an equal junction. \
              Traffic leaving an exit or an unpaved road gives way to everyone.",
    action_items: &[
        "Practise junctions without signs",
        "Learn the give-way and priority road signs",
    ],
    next_steps: &[
        "Take the roundabouts quiz next, it builds on these rules",
    ],
};

const SPEED_LIMITS: Template = Template {
    tone: Tone::Analytical,
    message: "Default speed limits for cars in the Netherlands:\n\n\
              - Built-up area: 50 km/h (often 30 km/h in zones).\n\
              - Outside built-up areas: 80 km/h.\n\
              - Expressway: 100 km/h.\n\
              - Motorway: 100 km/h by day, up to 130 km/h where signs allow.\n\n\
              Signs always override the defaults, and you adapt your speed to the conditions.",
    action_items: &[
        "Memorise the default limits per road type",
        "Learn the zone signs for 30 and 60 km/h",
    ],
    next_steps: &[
        "Practise questions where conditions require a lower speed",
    ],
};

const ROUNDABOUTS: Template = Template {
    tone: Tone::Analytical,
    message: "Roundabout rules:\n\n\
              - Give way to traffic already on the roundabout when you see shark teeth or a give-way sign.\n\
              - Do not signal left when entering; signal right before you take your exit.\n\
              - Watch for cyclists on the surrounding cycle path when you leave.\n\
              - Without signs or markings, traffic from the right has priority.",
    action_items: &[
        "Do the roundabouts practice set",
        "Learn the lane arrows on multi-lane roundabouts",
    ],
    next_steps: &[
        "Review the priority rules for cyclists",
    ],
};

const BOOKING: Template = Template {
    tone: Tone::Analytical,
    message: "Booking the theory exam:\n\n\
              1. Log in to Mijn CBR with your DigiD.\n\
              2. Choose the theory exam for category B.\n\
              3. Pick an exam centre, date and time.\n\
              4. Pay online to confirm the booking.\n\n\
              Bring a valid ID on the day; without it you cannot take the exam.",
    action_items: &[
        "Make sure your DigiD works before you start",
        "Book a date at least two weeks ahead",
    ],
    next_steps: &[
        "Plan your practice schedule up to the exam date",
    ],
};

const PREPARATION: Template = Template {
    tone: Tone::Encouraging,
    message: "A preparation plan that works:\n\n\
              - Study the theory book one chapter at a time.\n\
              - Practise each subject until you score 70% or more.\n\
              - Do hazard perception daily, it needs speed.\n\
              - Finish with full mock exams in the last week.",
    action_items: &[
        "Set a daily 30-minute practice slot",
        "Track your score per subject",
    ],
    next_steps: &[
        "Take a mock exam once every subject is above 70%",
    ],
};

const DIFFICULTY: Template = Template {
    tone: Tone::Supportive,
    message: "Finding it hard is normal; most learners struggle with the same parts.\n\n\
              Break the material into small pieces and practise one rule at a time. \
              Read the explanation after every wrong answer, that is where the learning happens.",
    action_items: &[
        "Pick one subject and do a short quiz",
        "Write down the rules you keep mixing up",
    ],
    next_steps: &[
        "Ask me about a specific rule you find confusing",
    ],
};

const RESULTS: Template = Template {
    tone: Tone::Supportive,
    message: "You get your result right after the exam. If you did not pass, \
              you can book a retake straight away.\n\n\
              Look at which part you failed and focus your practice there before the retake.",
    action_items: &[
        "Check which exam part needs work",
        "Book a retake via Mijn CBR",
    ],
    next_steps: &[
        "Practise that part until you pass it three times in a row",
    ],
};

const HELP_BEGINNER: Template = Template {
    tone: Tone::Supportive,
    message: "Your average is {score}%. No worries, everyone starts somewhere!\n\n\
              I can explain road signs, priority rules, roundabouts, traffic lights, \
              speed limits and the exam itself. Start with the basics and build from there.",
    action_items: &[
        "Study the basic road signs",
        "Do the traffic lights practice set",
    ],
    next_steps: &[
        "Ask me where to start",
        "Retake a quiz to track your progress",
    ],
};

const HELP_DEVELOPING: Template = Template {
    tone: Tone::Encouraging,
    message: "You're making progress with {score}%! You need about {gap} more points to reach 70%.\n\n\
              Ask me about any rule, or about the subject where you lose the most points.",
    action_items: &[
        "Redo the quiz with your lowest score",
        "Review the explanations of wrong answers",
    ],
    next_steps: &[
        "Aim for 70% in every subject",
    ],
};

const HELP_ADVANCED: Template = Template {
    tone: Tone::Motivational,
    message: "Excellent, {score}% is a strong average!\n\n\
              You're close to exam level. I can help with mock exams, \
              the exam format and booking your exam.",
    action_items: &[
        "Take a full mock exam",
        "Fine-tune hazard perception speed",
    ],
    next_steps: &[
        "Book your exam when mock results are consistently above 70%",
    ],
};

const GREETING: Template = Template {
    tone: Tone::Encouraging,
    message: "Hello! I'm your theory tutor.\n\n\
              Ask me about traffic rules, roundabouts, traffic lights, speed limits, \
              or about the CBR exam itself.",
    action_items: &[
        "Tell me which subject you want to practise",
    ],
    next_steps: &[
        "Start a quiz to measure your level",
    ],
};

const THANKS: Template = Template {
    tone: Tone::Encouraging,
    message: "You're welcome! Keep practising a little every day and you'll get there.",
    action_items: &[
        "Do one more short quiz today",
    ],
    next_steps: &[
        "Come back any time with a question",
    ],
};

const OVERVIEW: Template = Template {
    tone: Tone::Supportive,
    message: "I can help you prepare for the theory exam:\n\n\
              - Traffic rules: priority, roundabouts, traffic lights, speed limits.\n\
              - The CBR exam: format, pass marks, cost and booking.\n\
              - Study advice based on your quiz scores.\n\n\
              What would you like to know?",
    action_items: &[
        "Ask about a traffic rule",
        "Ask how the exam works",
    ],
    next_steps: &[
        "Take a practice quiz",
    ],
};
