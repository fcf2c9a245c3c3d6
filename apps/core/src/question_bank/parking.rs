use super::QuestionDef;

pub(super) const QUESTIONS: &[QuestionDef] = &[
    QuestionDef {
        id: "parking-1",
        text: "How close to a junction may you park?",
        options: &[
            ("a", "Anywhere, as long as you use hazard lights"),
            ("b", "No closer than 5 metres"),
            ("c", "No closer than 1 metre"),
        ],
        answer: "b",
        explanation: "Parking within 5 metres of a junction blocks the view of other road users and is not allowed.",
    },
    QuestionDef {
        id: "parking-2",
        text: "A yellow line is painted along the kerb. What does it mean?",
        options: &[
            ("a", "Parking is allowed for loading only"),
            ("b", "Parking is allowed at night"),
            ("c", "Stopping and parking are prohibited along that kerb"),
        ],
        answer: "c",
        explanation: "An unbroken yellow line means no stopping; a broken yellow line means no parking.",
    },
    QuestionDef {
        id: "parking-3",
        text: "You park on a downhill slope next to the kerb. How do you turn the front wheels?",
        options: &[
            ("a", "Towards the kerb"),
            ("b", "Away from the kerb"),
            ("c", "Straight ahead"),
        ],
        answer: "a",
        explanation: "Turned towards the kerb, the wheels stop the car from rolling into traffic if the brake fails.",
    },
    QuestionDef {
        id: "parking-4",
        text: "Where is parking always prohibited?",
        options: &[
            ("a", "In a residential street"),
            ("b", "On a pedestrian crossing and within 5 metres before it"),
            ("c", "Next to a park"),
        ],
        answer: "b",
        explanation: "Vehicles parked at a crossing hide pedestrians from approaching drivers.",
    },
    QuestionDef {
        id: "parking-5",
        text: "A blue zone sign is displayed. What do you need?",
        options: &[
            ("a", "A parking disc showing your arrival time"),
            ("b", "A parking ticket from the machine"),
            ("c", "A resident permit"),
        ],
        answer: "a",
        explanation: "In a blue zone you may park for a limited time with a parking disc set to your time of arrival.",
    },
];
