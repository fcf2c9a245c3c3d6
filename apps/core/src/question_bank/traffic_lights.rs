use super::QuestionDef;

pub(super) const QUESTIONS: &[QuestionDef] = &[
    QuestionDef {
        id: "lights-1",
        text: "The traffic light turns amber as you approach. What do you do?",
        options: &[
            ("a", "Accelerate to get through"),
            ("b", "Stop, unless you are so close that you cannot stop safely"),
            ("c", "Continue at the same speed"),
        ],
        answer: "b",
        explanation: "Amber means stop. Only continue if stopping would be unsafe.",
    },
    QuestionDef {
        id: "lights-2",
        text: "A flashing amber light is shown at a junction. What does it mean?",
        options: &[
            ("a", "The lights are out of order; normal priority rules and signs apply"),
            ("b", "You have priority"),
            ("c", "You must stop"),
        ],
        answer: "a",
        explanation: "A flashing amber light means caution. Signs, or the give-way-to-the-right rule, decide priority.",
    },
    QuestionDef {
        id: "lights-3",
        text: "A police officer waves you on while the light is red. What do you do?",
        options: &[
            ("a", "Wait for green"),
            ("b", "Follow the officer and drive on"),
            ("c", "Ask the officer for confirmation"),
        ],
        answer: "b",
        explanation: "Instructions from traffic controllers take precedence over traffic lights.",
    },
    QuestionDef {
        id: "lights-4",
        text: "The light is green but the junction ahead is congested. What do you do?",
        options: &[
            ("a", "Drive onto the junction, you have green"),
            ("b", "Wait before the stop line until you can cross completely"),
            ("c", "Drive onto the cycle path"),
        ],
        answer: "b",
        explanation: "Never block a junction. Only enter when you can clear it.",
    },
    QuestionDef {
        id: "lights-5",
        text: "There is a green arrow pointing right next to a red light. What may you do?",
        options: &[
            ("a", "Nothing, red takes priority"),
            ("b", "Turn right in the direction of the arrow"),
            ("c", "Go straight ahead"),
        ],
        answer: "b",
        explanation: "A green arrow releases only the direction it points to.",
    },
];
