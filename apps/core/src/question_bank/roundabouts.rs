use super::QuestionDef;

pub(super) const QUESTIONS: &[QuestionDef] = &[
    QuestionDef {
        id: "roundabout-1",
        text: "You approach a roundabout with shark teeth and a give-way sign. Who has priority?",
        options: &[
            ("a", "You, because you come from the right"),
            ("b", "Traffic already on the roundabout"),
            ("c", "Whoever arrives first"),
        ],
        answer: "b",
        explanation: "The give-way sign and shark teeth mean you yield to traffic already circulating.",
    },
    QuestionDef {
        id: "roundabout-2",
        text: "Do you signal when entering a roundabout?",
        options: &[
            ("a", "Yes, always signal left"),
            ("b", "Yes, signal right"),
            ("c", "No, you only signal right when leaving"),
        ],
        answer: "c",
        explanation: "In the Netherlands you do not indicate on entry; you signal right before your exit.",
    },
    QuestionDef {
        id: "roundabout-3",
        text: "A cyclist rides on the separate cycle path around the roundabout. You want to exit. What do you do?",
        options: &[
            ("a", "Give way to the cyclist if the cycle path has priority"),
            ("b", "Exit first, cars have priority"),
            ("c", "Sound the horn and exit"),
        ],
        answer: "a",
        explanation: "Inside built-up areas cyclists on a circulating cycle path usually have priority; check the markings.",
    },
    QuestionDef {
        id: "roundabout-4",
        text: "Which lane do you choose on a two-lane roundabout to take the last exit?",
        options: &[
            ("a", "The right lane"),
            ("b", "The left lane, following the arrows"),
            ("c", "Either lane"),
        ],
        answer: "b",
        explanation: "Lane arrows tell you which lane leads to which exit. For a later exit you normally keep left.",
    },
    QuestionDef {
        id: "roundabout-5",
        text: "A roundabout has no signs or road markings. Who has priority?",
        options: &[
            ("a", "Traffic on the roundabout"),
            ("b", "Traffic from the right, so traffic entering"),
            ("c", "Large vehicles"),
        ],
        answer: "b",
        explanation: "Without signs the general rule applies: traffic coming from the right has priority.",
    },
];
