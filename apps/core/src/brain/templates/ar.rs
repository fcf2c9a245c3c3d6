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
    message: "تبلغ تكلفة امتحان النظري للسيارة لدى CBR (الفئة B) ‏€37.50 عند الحجز عبر الإنترنت.\n\n\
              تنبيهات:\n\
              - الامتحان الممدد بوقت إضافي أغلى.\n\
              - الامتحان مع ترجمة صوتية أو مترجم له سعر مختلف.\n\
              - إذا ألغيت أو غيّرت الموعد متأخراً فستدفع الرسوم مرة أخرى.",
    action_items: &[
        "احجز امتحانك النظري عبر Mijn CBR باستخدام DigiD",
        "تحقق من الأسعار الحالية على موقع CBR قبل الدفع",
    ],
    next_steps: &[
        "اختر موعداً يترك لك أسبوعين على الأقل للتدريب",
        "أجرِ امتحاناً تجريبياً كاملاً قبل الامتحان الحقيقي",
    ],
};

const EXAM_FORMAT: Template = Template {
    tone: Tone::Analytical,
    message: "يتكون امتحان النظري لدى CBR من 65 سؤالاً في ثلاثة أجزاء ويستغرق حوالي 30 دقيقة:\n\n\
              1. إدراك المخاطر: 25 سؤالاً، تحتاج 13 إجابة صحيحة.\n\
              2. المعرفة: 12 سؤالاً، تحتاج 10 إجابات صحيحة.\n\
              3. الفهم: 28 سؤالاً، تحتاج 25 إجابة صحيحة.\n\n\
              يجب أن تنجح في كل جزء. أسئلة إدراك المخاطر محددة بوقت، فأجب بسرعة.",
    action_items: &[
        "تدرّب على إدراك المخاطر مع حد زمني",
        "احفظ درجة النجاح لكل جزء",
    ],
    next_steps: &[
        "أجرِ جولة تدريب لكل جزء من الامتحان",
        "راجع شرح كل إجابة خاطئة",
    ],
};

const FOCUS_BEGINNER: Template = Template {
    tone: Tone::Supportive,
    message: "معدلك {score}%، لذلك لنبنِ أساساً متيناً أولاً.\n\n\
              ابدأ بالأساسيات: إشارات الطريق وقواعد الأولوية وإشارات المرور الضوئية. \
              هذه تتكرر في معظم أسئلة الامتحان.",
    action_items: &[
        "ادرس أكثر إشارات الطريق شيوعاً",
        "تعلّم قاعدة الأولوية للقادم من اليمين",
        "حل مجموعة تمارين الإشارات الضوئية",
    ],
    next_steps: &[
        "أعد اختباراً قصيراً كل يوم",
        "اسألني عن أي قاعدة غير واضحة",
    ],
};

const FOCUS_DEVELOPING: Template = Template {
    tone: Tone::Encouraging,
    message: "معدلك {score}%، أي أقل من 70% بحوالي {gap} نقطة.\n\n\
              ركّز على أضعف موضوع لديك وعلى إدراك المخاطر، \
              فهناك تضيع معظم النقاط.",
    action_items: &[
        "أعد الموضوع صاحب أقل درجة",
        "تدرّب على إدراك المخاطر مع مؤقت",
    ],
    next_steps: &[
        "استهدف 70% في كل مجموعة تمارين",
        "اجمع بين المواضيع بعد أن تنجح في كل منها",
    ],
};

const FOCUS_ADVANCED: Template = Template {
    tone: Tone::Motivational,
    message: "عمل رائع، معدلك {score}%!\n\n\
              ركّز الآن على السرعة والثبات: امتحانات تجريبية كاملة بظروف الامتحان \
              وأسئلة الفهم الصعبة.",
    action_items: &[
        "أجرِ امتحاناً تجريبياً كاملاً من 65 سؤالاً",
        "راجع أسئلة الفهم التي أخطأت فيها",
    ],
    next_steps: &[
        "احجز امتحانك بعد النجاح في ثلاثة امتحانات تجريبية متتالية",
    ],
};

const MOCK_EXAM_READY: Template = Template {
    tone: Tone::Motivational,
    message: "بمعدل {score}% أنت جاهز لامتحان تجريبي كامل!\n\n\
              تعامل معه كأنه حقيقي: بلا استراحات، وبلا بحث عن الإجابات، \
              والتزم بالوقت.",
    action_items: &[
        "أجرِ امتحاناً تجريبياً كاملاً الآن",
        "دوّن كل سؤال ترددت فيه",
    ],
    next_steps: &[
        "احجز الامتحان الحقيقي إذا نجحت في الامتحان التجريبي مرتين",
        "حافظ على استمراريتك باختبار قصير كل يوم",
    ],
};

const TRAFFIC_LIGHTS: Template = Template {
    tone: Tone::Analytical,
    message: "الإشارات الضوئية باختصار:\n\n\
              - الأحمر: توقف قبل خط التوقف.\n\
              - البرتقالي: توقف، إلا إذا كنت قريباً جداً بحيث لا يمكنك التوقف بأمان.\n\
              - الأخضر: انطلق، ولكن فقط إذا كان بإمكانك عبور التقاطع.\n\
              - البرتقالي الوامض: الإشارات معطلة، وتنطبق قواعد الأولوية والإشارات العادية.\n\n\
              تعليمات منظم المرور لها الأسبقية دائماً على الإشارات.",
    action_items: &[
        "حل مجموعة تمارين الإشارات الضوئية",
        "تعلّم ما تسمح به الأسهم الخضراء",
    ],
    next_steps: &[
        "اجمع بين الإشارات الضوئية واختبار قواعد الأولوية",
    ],
};

const PRIORITY_RULES: Template = Template {
    tone: Tone::Analytical,
    message: "قواعد الأولوية حسب الترتيب:\n\n\
              1. منظمو المرور.\n\
              2. الإشارات الضوئية.\n\
              3. إشارات الطريق وعلامات أسنان القرش.\n\
              4. القاعدة العامة: الأولوية للقادم من اليمين.\n\n\
              الترام له الأولوية دائماً في التقاطع المتكافئ. \
              من يخرج من مدخل خاص أو طريق غير معبد يفسح الطريق للجميع.",
    action_items: &[
        "تدرّب على التقاطعات بدون إشارات",
        "تعلّم إشارات الأولوية وإفساح الطريق",
    ],
    next_steps: &[
        "انتقل بعدها إلى اختبار الدوارات، فهو مبني على هذه القواعد",
    ],
};

const SPEED_LIMITS: Template = Template {
    tone: Tone::Analytical,
    message: "حدود السرعة الافتراضية للسيارات في هولندا:\n\n\
              - داخل المناطق السكنية: 50 كم/س (وغالباً 30 كم/س في المناطق المحددة).\n\
              - خارج المناطق السكنية: 80 كم/س.\n\
              - الطريق السريع العادي: 100 كم/س.\n\
              - الطريق السريع: 100 كم/س نهاراً، وحتى 130 كم/س حيث تسمح الإشارات.\n\n\
              الإشارات لها الأسبقية دائماً، وعليك ملاءمة سرعتك للظروف.",
    action_items: &[
        "احفظ الحد الافتراضي لكل نوع طريق",
        "تعلّم إشارات مناطق 30 و60 كم/س",
    ],
    next_steps: &[
        "تدرّب على الأسئلة التي تتطلب فيها الظروف سرعة أقل",
    ],
};

const ROUNDABOUTS: Template = Template {
    tone: Tone::Analytical,
    message: "قواعد الدوار:\n\n\
              - أفسح الطريق للمركبات الموجودة على الدوار عند وجود أسنان القرش أو إشارة إفساح الطريق.\n\
              - لا تستخدم إشارة اليسار عند الدخول؛ استخدم إشارة اليمين قبل الخروج.\n\
              - انتبه لراكبي الدراجات على المسار المحيط عند الخروج.\n\
              - بدون إشارات أو علامات، الأولوية للقادم من اليمين.",
    action_items: &[
        "حل مجموعة تمارين الدوارات",
        "تعلّم أسهم المسارات في الدوارات متعددة المسارات",
    ],
    next_steps: &[
        "راجع قواعد الأولوية لراكبي الدراجات",
    ],
};

const BOOKING: Template = Template {
    tone: Tone::Analytical,
    message: "حجز امتحان النظري:\n\n\
              1. سجّل الدخول إلى Mijn CBR باستخدام DigiD.\n\
              2. اختر امتحان النظري للفئة B.\n\
              3. اختر مركز الامتحان والتاريخ والوقت.\n\
              4. ادفع عبر الإنترنت لتأكيد الحجز.\n\n\
              أحضر وثيقة هوية سارية يوم الامتحان، وإلا فلن يُسمح لك بالدخول.",
    action_items: &[
        "تأكد من أن DigiD يعمل قبل البدء",
        "احجز موعداً قبل أسبوعين على الأقل",
    ],
    next_steps: &[
        "خطط جدول تدريبك حتى موعد الامتحان",
    ],
};

const PREPARATION: Template = Template {
    tone: Tone::Encouraging,
    message: "خطة تحضير ناجحة:\n\n\
              - ادرس كتاب النظري فصلاً فصلاً.\n\
              - تدرّب على كل موضوع حتى تحصل على 70% أو أكثر.\n\
              - تدرّب يومياً على إدراك المخاطر، فهو يحتاج إلى سرعة.\n\
              - اختم بامتحانات تجريبية كاملة في الأسبوع الأخير.",
    action_items: &[
        "خصص 30 دقيقة يومياً للتدريب",
        "تابع درجتك في كل موضوع",
    ],
    next_steps: &[
        "أجرِ امتحاناً تجريبياً عندما تتجاوز 70% في كل المواضيع",
    ],
};

const DIFFICULTY: Template = Template {
    tone: Tone::Supportive,
    message: "من الطبيعي أن تجد الأمر صعباً؛ معظم المتعلمين يواجهون صعوبة في الأجزاء نفسها.\n\n\
              قسّم المادة إلى أجزاء صغيرة وتدرّب على قاعدة واحدة في كل مرة. \
              اقرأ الشرح بعد كل إجابة خاطئة، فهناك يحدث التعلم.",
    action_items: &[
        "اختر موضوعاً واحداً وحل اختباراً قصيراً",
        "اكتب القواعد التي تخلط بينها دائماً",
    ],
    next_steps: &[
        "اسألني عن قاعدة محددة تجدها محيرة",
    ],
};

const RESULTS: Template = Template {
    tone: Tone::Supportive,
    message: "تحصل على نتيجتك مباشرة بعد الامتحان. إذا لم تنجح، \
              يمكنك حجز إعادة الامتحان فوراً.\n\n\
              انظر إلى الجزء الذي لم تنجح فيه وركّز تدريبك عليه قبل الإعادة.",
    action_items: &[
        "تحقق من جزء الامتحان الذي يحتاج إلى تدريب",
        "احجز إعادة الامتحان عبر Mijn CBR",
    ],
    next_steps: &[
        "تدرّب على ذلك الجزء حتى تنجح فيه ثلاث مرات متتالية",
    ],
};

const HELP_BEGINNER: Template = Template {
    tone: Tone::Supportive,
    message: "معدلك {score}%. لا تقلق، الجميع يبدأ من مكان ما!\n\n\
              يمكنني شرح إشارات الطريق وقواعد الأولوية والدوارات والإشارات الضوئية \
              وحدود السرعة والامتحان نفسه. ابدأ بالأساسيات وابنِ عليها.",
    action_items: &[
        "ادرس إشارات الطريق الأساسية",
        "حل مجموعة تمارين الإشارات الضوئية",
    ],
    next_steps: &[
        "اسألني من أين تبدأ",
        "أعد اختباراً لتتابع تقدمك",
    ],
};

const HELP_DEVELOPING: Template = Template {
    tone: Tone::Encouraging,
    message: "أنت تتقدم بمعدل {score}%! تحتاج إلى حوالي {gap} نقطة إضافية للوصول إلى 70%.\n\n\
              اسألني عن أي قاعدة، أو عن الموضوع الذي تخسر فيه أكثر النقاط.",
    action_items: &[
        "أعد الاختبار صاحب أقل درجة",
        "راجع شرح الإجابات الخاطئة",
    ],
    next_steps: &[
        "استهدف 70% في كل موضوع",
    ],
};

const HELP_ADVANCED: Template = Template {
    tone: Tone::Motivational,
    message: "ممتاز، {score}% معدل قوي!\n\n\
              أنت قريب من مستوى الامتحان. يمكنني مساعدتك في الامتحانات التجريبية \
              وشكل الامتحان وحجز موعدك.",
    action_items: &[
        "أجرِ امتحاناً تجريبياً كاملاً",
        "حسّن سرعتك في إدراك المخاطر",
    ],
    next_steps: &[
        "احجز امتحانك عندما تكون نتائجك التجريبية فوق 70% باستمرار",
    ],
};

const GREETING: Template = Template {
    tone: Tone::Encouraging,
    message: "مرحباً! أنا مدرّبك للامتحان النظري.\n\n\
              اسألني عن قواعد المرور والدوارات والإشارات الضوئية وحدود السرعة \
              أو عن امتحان CBR نفسه.",
    action_items: &[
        "أخبرني بالموضوع الذي تريد التدرب عليه",
    ],
    next_steps: &[
        "ابدأ اختباراً لقياس مستواك",
    ],
};

const THANKS: Template = Template {
    tone: Tone::Encouraging,
    message: "على الرحب والسعة! تدرّب قليلاً كل يوم وستنجح.",
    action_items: &[
        "حل اختباراً قصيراً آخر اليوم",
    ],
    next_steps: &[
        "عد إليّ متى كان لديك سؤال",
    ],
};

const OVERVIEW: Template = Template {
    tone: Tone::Supportive,
    message: "يمكنني مساعدتك في التحضير لامتحان النظري:\n\n\
              - قواعد المرور: الأولوية والدوارات والإشارات الضوئية وحدود السرعة.\n\
              - امتحان CBR: الشكل ودرجات النجاح والتكلفة والحجز.\n\
              - نصائح دراسية بناءً على نتائج اختباراتك.\n\n\
              ماذا تريد أن تعرف؟",
    action_items: &[
        "اسأل عن قاعدة مرور",
        "اسأل عن طريقة عمل الامتحان",
    ],
    next_steps: &[
        "حل اختباراً تدريبياً",
    ],
};
