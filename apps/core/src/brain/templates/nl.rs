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
    message: "Het CBR-theorie-examen auto (categorie B) kost €37,50 als je online reserveert.\n\n\
              Let op:\n\
              - Een verlengd examen met extra tijd is duurder.\n\
              - Voor een examen met gesproken vertaling of tolk geldt een apart tarief.\n\
              - Annuleer of verzet je te laat, dan betaal je opnieuw.",
    action_items: &[
        "Reserveer je theorie-examen online via Mijn CBR met je DigiD",
        "Controleer de actuele tarieven op de CBR-website voordat je betaalt",
    ],
    next_steps: &[
        "Kies een datum met minstens twee weken oefentijd",
        "Maak een volledig proefexamen voor het echte examen",
    ],
};

const EXAM_FORMAT: Template = Template {
    tone: Tone::Analytical,
    message: "Het CBR-theorie-examen heeft 65 vragen in drie onderdelen en duurt ongeveer 30 minuten:\n\n\
              1. Gevaarherkenning: 25 vragen, je hebt er 13 goed nodig.\n\
              2. Kennis: 12 vragen, je hebt er 10 goed nodig.\n\
              3. Inzicht: 28 vragen, je hebt er 25 goed nodig.\n\n\
              Je moet elk onderdeel halen. Bij gevaarherkenning telt de tijd, dus antwoord snel.",
    action_items: &[
        "Oefen gevaarherkenning met een tijdslimiet",
        "Onthoud de norm per onderdeel",
    ],
    next_steps: &[
        "Doe per examenonderdeel een oefenronde",
        "Bekijk bij elk fout antwoord de uitleg",
    ],
};

const FOCUS_BEGINNER: Template = Template {
    tone: Tone::Supportive,
    message: "Je gemiddelde is {score}%, dus we leggen eerst een stevige basis.\n\n\
              Begin met de basis: verkeersborden, voorrangsregels en verkeerslichten. \
              Die komen in bijna elke examenvraag terug.",
    action_items: &[
        "Leer de meest voorkomende verkeersborden",
        "Leer de regel: verkeer van rechts gaat voor",
        "Maak de oefenset verkeerslichten",
    ],
    next_steps: &[
        "Doe elke dag een korte quiz opnieuw",
        "Vraag me naar elke regel die onduidelijk is",
    ],
};

const FOCUS_DEVELOPING: Template = Template {
    tone: Tone::Encouraging,
    message: "Je zit op {score}%, ongeveer {gap} punten onder de 70%.\n\n\
              Richt je op je zwakste onderwerp en op gevaarherkenning, \
              daar worden de meeste punten verloren.",
    action_items: &[
        "Herhaal het onderwerp met je laagste score",
        "Oefen gevaarherkenning met een timer",
    ],
    next_steps: &[
        "Streef naar 70% bij elke oefenset",
        "Combineer onderwerpen zodra je ze los haalt",
    ],
};

const FOCUS_ADVANCED: Template = Template {
    tone: Tone::Motivational,
    message: "Goed bezig, je gemiddelde is {score}%!\n\n\
              Richt je nu op snelheid en constantheid: volledige proefexamens onder examenomstandigheden \
              en de lastige inzichtvragen.",
    action_items: &[
        "Maak een volledig proefexamen van 65 vragen",
        "Bekijk de inzichtvragen die je fout had",
    ],
    next_steps: &[
        "Reserveer je examen als je drie proefexamens op rij haalt",
    ],
};

const MOCK_EXAM_READY: Template = Template {
    tone: Tone::Motivational,
    message: "Met een gemiddelde van {score}% ben je klaar voor een volledig proefexamen!\n\n\
              Doe het alsof het echt is: geen pauzes, niets opzoeken \
              en houd je aan de tijd.",
    action_items: &[
        "Maak nu een volledig proefexamen",
        "Noteer elke vraag waarbij je twijfelde",
    ],
    next_steps: &[
        "Reserveer het echte examen als je het proefexamen twee keer haalt",
        "Houd je reeks vast met elke dag een korte quiz",
    ],
};

const TRAFFIC_LIGHTS: Template = Template {
    tone: Tone::Analytical,
    message: "Verkeerslichten in het kort:\n\n\
              - Rood: stop voor de stopstreep.\n\
              - Oranje: stop, tenzij je te dichtbij bent om veilig te stoppen.\n\
              - Groen: rijden, maar alleen als je het kruispunt kunt oversteken.\n\
              - Knipperend oranje: de lichten zijn uit, de gewone voorrangsregels en borden gelden.\n\n\
              Aanwijzingen van een verkeersregelaar gaan altijd voor de lichten.",
    action_items: &[
        "Maak de oefenset verkeerslichten",
        "Leer wat groene pijlen vrijgeven",
    ],
    next_steps: &[
        "Combineer verkeerslichten met de quiz over voorrang",
    ],
};

const PRIORITY_RULES: Template = Template {
    tone: Tone::Analytical,
    message: "Voorrangsregels in volgorde:\n\n\
              1. Verkeersregelaars.\n\
              2. Verkeerslichten.\n\
              3. Verkeersborden en haaientanden.\n\
              4. Algemene regel: verkeer van rechts heeft voorrang.\n\n\
              Trams hebben op een gelijkwaardig kruispunt altijd voorrang. \
              Wie uit een uitrit of van een onverharde weg komt, verleent iedereen voorrang.",
    action_items: &[
        "Oefen kruispunten zonder borden",
        "Leer de voorrangsborden",
    ],
    next_steps: &[
        "Doe daarna de rotondequiz, die bouwt hierop voort",
    ],
};

const SPEED_LIMITS: Template = Template {
    tone: Tone::Analytical,
    message: "Standaard maximumsnelheden voor auto's in Nederland:\n\n\
              - Binnen de bebouwde kom: 50 km/h (vaak 30 km/h in zones).\n\
              - Buiten de bebouwde kom: 80 km/h.\n\
              - Autoweg: 100 km/h.\n\
              - Autosnelweg: overdag 100 km/h, tot 130 km/h waar borden dat toestaan.\n\n\
              Borden gaan altijd voor, en je past je snelheid aan de omstandigheden aan.",
    action_items: &[
        "Onthoud de standaardsnelheid per wegtype",
        "Leer de zoneborden voor 30 en 60 km/h",
    ],
    next_steps: &[
        "Oefen vragen waarbij de omstandigheden een lagere snelheid vragen",
    ],
};

const ROUNDABOUTS: Template = Template {
    tone: Tone::Analytical,
    message: "Regels op de rotonde:\n\n\
              - Verleen voorrang aan verkeer op de rotonde bij haaientanden of een voorrangsbord.\n\
              - Geef geen richting naar links aan bij het oprijden; richting rechts voordat je afslaat.\n\
              - Let bij het verlaten op fietsers op het fietspad rondom.\n\
              - Zonder borden of markering heeft verkeer van rechts voorrang.",
    action_items: &[
        "Maak de oefenset rotondes",
        "Leer de pijlen op rotondes met meerdere rijstroken",
    ],
    next_steps: &[
        "Bekijk de voorrangsregels voor fietsers",
    ],
};

const BOOKING: Template = Template {
    tone: Tone::Analytical,
    message: "Theorie-examen reserveren:\n\n\
              1. Log in op Mijn CBR met je DigiD.\n\
              2. Kies het theorie-examen voor categorie B.\n\
              3. Kies een examenlocatie, datum en tijd.\n\
              4. Betaal online om de reservering te bevestigen.\n\n\
              Neem op de dag een geldig identiteitsbewijs mee, anders mag je niet meedoen.",
    action_items: &[
        "Controleer vooraf of je DigiD werkt",
        "Reserveer minstens twee weken vooruit",
    ],
    next_steps: &[
        "Plan je oefenschema tot de examendatum",
    ],
};

const PREPARATION: Template = Template {
    tone: Tone::Encouraging,
    message: "Een voorbereidingsplan dat werkt:\n\n\
              - Bestudeer het theorieboek hoofdstuk voor hoofdstuk.\n\
              - Oefen elk onderwerp tot je 70% of meer haalt.\n\
              - Doe dagelijks gevaarherkenning, daar is snelheid nodig.\n\
              - Sluit af met volledige proefexamens in de laatste week.",
    action_items: &[
        "Plan elke dag 30 minuten oefentijd",
        "Houd je score per onderwerp bij",
    ],
    next_steps: &[
        "Maak een proefexamen zodra elk onderwerp boven 70% zit",
    ],
};

const DIFFICULTY: Template = Template {
    tone: Tone::Supportive,
    message: "Het is normaal dat je het lastig vindt; de meeste leerlingen worstelen met dezelfde onderdelen.\n\n\
              Knip de stof in kleine stukken en oefen één regel tegelijk. \
              Lees na elk fout antwoord de uitleg, daar leer je het meest van.",
    action_items: &[
        "Kies één onderwerp en doe een korte quiz",
        "Schrijf de regels op die je steeds verwart",
    ],
    next_steps: &[
        "Vraag me naar een specifieke regel die je verwarrend vindt",
    ],
};

const RESULTS: Template = Template {
    tone: Tone::Supportive,
    message: "Je krijgt de uitslag direct na het examen. Ben je gezakt, \
              dan kun je meteen een herexamen reserveren.\n\n\
              Kijk welk onderdeel je niet haalde en oefen daar gericht op voor het herexamen.",
    action_items: &[
        "Bekijk welk examenonderdeel extra oefening nodig heeft",
        "Reserveer een herexamen via Mijn CBR",
    ],
    next_steps: &[
        "Oefen dat onderdeel tot je het drie keer op rij haalt",
    ],
};

const HELP_BEGINNER: Template = Template {
    tone: Tone::Supportive,
    message: "Je gemiddelde is {score}%. Geen zorgen, iedereen begint ergens!\n\n\
              Ik kan verkeersborden, voorrangsregels, rotondes, verkeerslichten, \
              maximumsnelheden en het examen zelf uitleggen. Begin bij de basis en bouw verder.",
    action_items: &[
        "Leer de basisverkeersborden",
        "Maak de oefenset verkeerslichten",
    ],
    next_steps: &[
        "Vraag me waar je moet beginnen",
        "Doe een quiz opnieuw om je voortgang te meten",
    ],
};

const HELP_DEVELOPING: Template = Template {
    tone: Tone::Encouraging,
    message: "Je gaat vooruit met {score}%! Je hebt nog ongeveer {gap} punten nodig voor 70%.\n\n\
              Vraag me naar elke regel, of naar het onderwerp waar je de meeste punten verliest.",
    action_items: &[
        "Herhaal de quiz met je laagste score",
        "Lees de uitleg bij foute antwoorden",
    ],
    next_steps: &[
        "Streef naar 70% bij elk onderwerp",
    ],
};

const HELP_ADVANCED: Template = Template {
    tone: Tone::Motivational,
    message: "Uitstekend, {score}% is een sterk gemiddelde!\n\n\
              Je zit dicht bij examenniveau. Ik help je met proefexamens, \
              de opbouw van het examen en het reserveren.",
    action_items: &[
        "Maak een volledig proefexamen",
        "Verbeter je snelheid bij gevaarherkenning",
    ],
    next_steps: &[
        "Reserveer je examen als je proefexamens steeds boven 70% scoort",
    ],
};

const GREETING: Template = Template {
    tone: Tone::Encouraging,
    message: "Hallo! Ik ben je theoriecoach.\n\n\
              Vraag me naar verkeersregels, rotondes, verkeerslichten, maximumsnelheden \
              of naar het CBR-examen zelf.",
    action_items: &[
        "Vertel me welk onderwerp je wilt oefenen",
    ],
    next_steps: &[
        "Start een quiz om je niveau te meten",
    ],
};

const THANKS: Template = Template {
    tone: Tone::Encouraging,
    message: "Graag gedaan! Oefen elke dag een beetje en je haalt het.",
    action_items: &[
        "Doe vandaag nog één korte quiz",
    ],
    next_steps: &[
        "Kom terug wanneer je een vraag hebt",
    ],
};

const OVERVIEW: Template = Template {
    tone: Tone::Supportive,
    message: "Ik help je bij de voorbereiding op het theorie-examen:\n\n\
              - Verkeersregels: voorrang, rotondes, verkeerslichten, maximumsnelheden.\n\
              - Het CBR-examen: opbouw, normen, kosten en reserveren.\n\
              - Studieadvies op basis van je quizscores.\n\n\
              Wat wil je weten?",
    action_items: &[
        "Stel een vraag over een verkeersregel",
        "Vraag hoe het examen werkt",
    ],
    next_steps: &[
        "Maak een oefenquiz",
    ],
};
