use super::QuestionDef;

pub(super) const QUESTIONS: &[QuestionDef] = &[
    QuestionDef {
        id: "hazard-1",
        text: "A ball rolls onto the road from between two parked cars. What do you do?",
        options: &[
            ("a", "Sound the horn and keep your speed"),
            ("b", "Brake and expect a child to follow the ball"),
            ("c", "Swerve onto the opposite lane"),
        ],
        answer: "b",
        explanation: "A rolling ball is a classic warning that a child may run after it. Slow down and be ready to stop.",
    },
    QuestionDef {
        id: "hazard-2",
        text: "You are driving behind a cyclist who looks over their left shoulder. What is most likely?",
        options: &[
            ("a", "The cyclist is about to turn left or move out"),
            ("b", "The cyclist wants you to overtake"),
            ("c", "Nothing, cyclists look around all the time"),
        ],
        answer: "a",
        explanation: "A shoulder check usually precedes a change of direction. Hold back and give the cyclist room.",
    },
    QuestionDef {
        id: "hazard-3",
        text: "The road surface ahead is wet and covered with fallen leaves. How should you adjust?",
        options: &[
            ("a", "Keep the same speed, the tyres will cope"),
            ("b", "Brake hard before the leaves"),
            ("c", "Reduce speed early and increase the following distance"),
        ],
        answer: "c",
        explanation: "Wet leaves reduce grip considerably. Slow down gradually and leave more space to stop.",
    },
    QuestionDef {
        id: "hazard-4",
        text: "A bus at a stop on your side of the road switches on its left indicator. What do you do?",
        options: &[
            ("a", "Accelerate to pass before it pulls out"),
            ("b", "Let the bus pull out if it is safe to do so"),
            ("c", "Sound the horn to warn the driver"),
        ],
        answer: "b",
        explanation: "Inside built-up areas you must give a bus leaving a stop the opportunity to pull out.",
    },
    QuestionDef {
        id: "hazard-5",
        text: "At night an oncoming car dazzles you with its headlights. What is the safest reaction?",
        options: &[
            ("a", "Look towards the right edge of the road and slow down"),
            ("b", "Flash your high beam back"),
            ("c", "Close your eyes briefly"),
        ],
        answer: "a",
        explanation: "Looking at the right edge keeps you on course while the glare passes. Reduce speed until your vision recovers.",
    },
];
