//! Seed data: the built-in content bank, the learning levels with their lessons,
//! and the static cultural facts. These guarantee the app is useful without any
//! external config.

use crate::domain::{
  CulturalFacts, Festival, LearningContent, Lesson, LessonBody, Level, Proverb, Quiz, Riddle,
  Story, Word, WordOfTheDay,
};

fn word(telugu: &str, transliteration: &str, meaning: &str) -> Word {
  Word { telugu: telugu.into(), transliteration: transliteration.into(), meaning: meaning.into() }
}

pub fn seed_quizzes() -> Vec<Quiz> {
  vec![
    Quiz {
      id: "1".into(),
      question: "What does 'నమస్కారం' mean?".into(),
      question_telugu: Some("నమస్కారం అంటే ఏమిటి?".into()),
      options: vec!["Hello/Goodbye".into(), "Thank you".into(), "Good morning".into(), "How are you?".into()],
      correct_answer: 0,
      explanation: Some("నమస్కారం is a respectful greeting used for both hello and goodbye in Telugu culture.".into()),
      difficulty: "beginner".into(),
      category: "greetings".into(),
    },
    Quiz {
      id: "2".into(),
      question: "Which classical dance form originated from Andhra Pradesh?".into(),
      question_telugu: Some("ఆంధ్రప్రదేశ్ నుండి ఉద్భవించిన శాస్త్రీయ నృత్య రూపం ఏది?".into()),
      options: vec!["Bharatanatyam".into(), "Kuchipudi".into(), "Kathak".into(), "Odissi".into()],
      correct_answer: 1,
      explanation: Some("Kuchipudi is the classical dance form that originated from the village of Kuchipudi in Andhra Pradesh.".into()),
      difficulty: "intermediate".into(),
      category: "arts".into(),
    },
    Quiz {
      id: "3".into(),
      question: "Which festival marks the Telugu New Year?".into(),
      question_telugu: Some("తెలుగు నూతన సంవత్సరం ఏ పండుగతో మొదలవుతుంది?".into()),
      options: vec!["Sankranti".into(), "Dussehra".into(), "Ugadi".into(), "Deepavali".into()],
      correct_answer: 2,
      explanation: Some("Ugadi is celebrated in March-April with ఉగాది పచ్చడి, a chutney of six tastes.".into()),
      difficulty: "beginner".into(),
      category: "festivals".into(),
    },
  ]
}

pub fn seed_stories() -> Vec<Story> {
  vec![
    Story {
      id: "1".into(),
      title: "The Clever Tenali Rama".into(),
      title_telugu: Some("తెలివైన తెనాలి రామ".into()),
      summary: "One of the most beloved characters in Telugu folklore, Tenali Rama was known for his wit and wisdom.".into(),
      content: "Tenali Rama was a poet and advisor in the court of King Krishnadevaraya. Known for his quick wit and humor, he often used his intelligence to solve complex problems and teach valuable lessons. In this particular story, a proud scholar arrived at the court claiming to know everything. He challenged anyone to ask him a question he couldn't answer...".into(),
      image_url: Some("https://images.unsplash.com/photo-1578662996442-48f60103fc96?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=300".into()),
      category: "folk".into(),
      author: Some("Traditional".into()),
    },
    Story {
      id: "2".into(),
      title: "The Magic Banyan Tree".into(),
      title_telugu: Some("మాయా మర్రిచెట్టు".into()),
      summary: "A mystical tale about a magical banyan tree that granted wishes to those pure of heart.".into(),
      content: "In a small village nestled between rolling hills, there stood an ancient banyan tree that was said to possess magical powers. The villagers believed that the tree could grant wishes, but only to those who approached it with a pure heart and genuine intentions...".into(),
      image_url: None,
      category: "moral".into(),
      author: Some("Traditional".into()),
    },
  ]
}

pub fn seed_riddles() -> Vec<Riddle> {
  vec![
    Riddle {
      id: "1".into(),
      riddle: "Born at night, die in the day. Who am I?".into(),
      riddle_telugu: "రాత్రికి పుట్టిన, పగలికి చస్తాను. నేను ఎవరిని?".into(),
      answer: "Light/Lamp".into(),
      answer_telugu: Some("వెలుగు".into()),
      explanation: Some("A lamp or light is lit at night and extinguished during the day.".into()),
    },
    Riddle {
      id: "2".into(),
      riddle: "It has a neck but no head, it wears a cap but has no hair. What is it?".into(),
      riddle_telugu: "మెడ ఉంది కానీ తల లేదు, టోపీ ఉంది కానీ జుట్టు లేదు. ఏమిటది?".into(),
      answer: "Bottle".into(),
      answer_telugu: Some("సీసా".into()),
      explanation: None,
    },
  ]
}

pub fn seed_proverbs() -> Vec<Proverb> {
  vec![
    Proverb {
      id: "1".into(),
      proverb: "The mustard plant died after the son-in-law arrived".into(),
      proverb_telugu: "అల్లుడు వచ్చాక ఆవిమించు చచ్చింది".into(),
      meaning: "People often show off excessively when important guests arrive, sometimes causing problems.".into(),
      context: Some("Used to describe situations where people overspend or overextend themselves to impress others.".into()),
    },
    Proverb {
      id: "2".into(),
      proverb: "Drop by drop, a pond fills".into(),
      proverb_telugu: "చుక్క చుక్క కలిస్తే చెరువు".into(),
      meaning: "Small, steady efforts add up to something large.".into(),
      context: None,
    },
  ]
}

pub fn seed_learning_content() -> Vec<LearningContent> {
  vec![
    LearningContent {
      id: "1".into(),
      title: "The Telugu Script".into(),
      content: "Telugu is written in an abugida of 16 vowels (అచ్చులు) and 36 consonants (హల్లులు). Each consonant carries an inherent 'a' that vowel signs modify.".into(),
      level: "beginner".into(),
      category: "alphabet".into(),
      order_index: 0,
    },
    LearningContent {
      id: "2".into(),
      title: "Greeting Elders".into(),
      content: "Use మీరు (meeru) rather than నువ్వు (nuvvu) with elders and strangers, and greet with నమస్కారం and folded hands.".into(),
      level: "beginner".into(),
      category: "greetings".into(),
      order_index: 1,
    },
    LearningContent {
      id: "3".into(),
      title: "Verb Endings".into(),
      content: "Telugu verbs agree with the subject: తింటాను (I eat), తింటావు (you eat), తింటాడు (he eats).".into(),
      level: "intermediate".into(),
      category: "grammar".into(),
      order_index: 0,
    },
  ]
}

/// Built-in learning path: Beginner, Intermediate, Advanced.
pub fn seed_levels() -> Vec<Level> {
  vec![
    Level {
      id: "beginner".into(),
      title: "Beginner".into(),
      subtitle: "Start from basics".into(),
      topics: vec![
        "Telugu Alphabet (అక్షరాలు)".into(),
        "Basic Greetings".into(),
        "Numbers & Colors".into(),
        "Family Relations".into(),
      ],
      lessons: vec![
        Lesson {
          id: "beginner-greetings".into(),
          title: "Basic Greetings".into(),
          body: LessonBody::Vocabulary {
            words: vec![
              word("నమస్కారం", "Namaskaram", "Hello/Goodbye (formal)"),
              word("ధన్యవాదాలు", "Dhanyavadalu", "Thank you"),
              word("క్షమించండి", "Kshaminchandi", "Excuse me/Sorry"),
              word("మీరు ఎలా ఉన్నారు?", "Meeru ela unnaru?", "How are you?"),
            ],
          },
        },
        Lesson {
          id: "beginner-greetings-check".into(),
          title: "Greeting Check".into(),
          body: LessonBody::Exercise {
            question: "How do you say 'Thank you' in Telugu?".into(),
            question_telugu: None,
            options: vec!["నమస్కారం".into(), "ధన్యవాదాలు".into(), "క్షమించండి".into()],
            correct_answer: 1,
            explanation: Some("ధన్యవాదాలు (Dhanyavadalu) is the standard way to thank someone.".into()),
          },
        },
        Lesson {
          id: "beginner-namaskaram".into(),
          title: "The Folded-Hands Greeting".into(),
          body: LessonBody::Cultural {
            note: "నమస్కారం is said with palms pressed together, a gesture of respect used with elders, teachers and guests.".into(),
            examples: vec![
              "Greeting grandparents when visiting".into(),
              "Welcoming guests at the door".into(),
            ],
          },
        },
      ],
    },
    Level {
      id: "intermediate".into(),
      title: "Intermediate".into(),
      subtitle: "Build vocabulary".into(),
      topics: vec![
        "Conversation Skills".into(),
        "Grammar Rules".into(),
        "Cultural Context".into(),
        "Reading Practice".into(),
      ],
      lessons: vec![
        Lesson {
          id: "intermediate-word-order".into(),
          title: "Sentence Order".into(),
          body: LessonBody::Grammar {
            rule: "Telugu is subject-object-verb: the verb comes last.".into(),
            examples: vec![
              word("నేను అన్నం తింటాను", "Nenu annam tintanu", "I eat rice"),
              word("నేను బడికి వెళ్తాను", "Nenu badiki veltanu", "I go to school"),
            ],
          },
        },
        Lesson {
          id: "intermediate-family".into(),
          title: "Family Relations".into(),
          body: LessonBody::Vocabulary {
            words: vec![
              word("అమ్మ", "Amma", "Mother"),
              word("నాన్న", "Nanna", "Father"),
              word("అన్న", "Anna", "Elder brother"),
              word("అక్క", "Akka", "Elder sister"),
              word("తమ్ముడు", "Tammudu", "Younger brother"),
              word("చెల్లి", "Chelli", "Younger sister"),
            ],
          },
        },
        Lesson {
          id: "intermediate-family-check".into(),
          title: "Who Is Akka?".into(),
          body: LessonBody::Exercise {
            question: "What does 'అక్క' (Akka) mean?".into(),
            question_telugu: Some("అక్క అంటే ఏమిటి?".into()),
            options: vec!["Younger sister".into(), "Elder sister".into(), "Mother".into(), "Aunt".into()],
            correct_answer: 1,
            explanation: Some("అక్క is an elder sister; a younger sister is చెల్లి.".into()),
          },
        },
      ],
    },
    Level {
      id: "advanced".into(),
      title: "Advanced".into(),
      subtitle: "Master the language".into(),
      topics: vec![
        "Literary Works".into(),
        "Poetry & Prose".into(),
        "Dialects & Variations".into(),
        "Teaching Others".into(),
      ],
      lessons: vec![
        Lesson {
          id: "advanced-honorifics".into(),
          title: "Respectful Address".into(),
          body: LessonBody::Grammar {
            rule: "Use the plural మీరు (meeru) and its verb forms to address someone respectfully.".into(),
            examples: vec![
              word("నువ్వు ఎక్కడికి వెళ్తున్నావు?", "Nuvvu ekkadiki veltunnavu?", "Where are you going? (informal)"),
              word("మీరు ఎక్కడికి వెళ్తున్నారు?", "Meeru ekkadiki veltunnaru?", "Where are you going? (respectful)"),
            ],
          },
        },
        Lesson {
          id: "advanced-sankranti".into(),
          title: "Sankranti".into(),
          body: LessonBody::Cultural {
            note: "Sankranti is the January harvest festival, celebrated over several days.".into(),
            examples: vec![
              "ముగ్గులు (muggulu): patterns drawn before the house".into(),
              "గాలిపటాలు (gaalipatalu): kite flying".into(),
              "పొంగలి (pongali): sweet rice cooked with new harvest".into(),
            ],
          },
        },
        Lesson {
          id: "advanced-nannaya".into(),
          title: "The First Poet".into(),
          body: LessonBody::Exercise {
            question: "Who began the Telugu rendering of the Mahabharata and is called Adi Kavi?".into(),
            question_telugu: Some("ఆదికవి అని ఎవరిని పిలుస్తారు?".into()),
            options: vec!["Nannaya".into(), "Tikkana".into(), "Vemana".into(), "Pothana".into()],
            correct_answer: 0,
            explanation: Some("Nannaya began the Andhra Mahabharatam in the 11th century; Tikkana and Errana completed it.".into()),
          },
        },
      ],
    },
  ]
}

pub fn cultural_facts() -> CulturalFacts {
  CulturalFacts {
    speakers: "75 million+".into(),
    countries: "50+".into(),
    literature_age: "1000+ years".into(),
    ranking: "8th most spoken in India".into(),
    festivals: vec![
      Festival {
        name: "Ugadi".into(),
        description: "Telugu New Year celebrated with traditional foods and cultural programs".into(),
        period: "March-April".into(),
      },
      Festival {
        name: "Dussehra".into(),
        description: "Victory of good over evil, celebrated with grand processions".into(),
        period: "September-October".into(),
      },
      Festival {
        name: "Sankranti".into(),
        description: "Harvest festival with kite flying and traditional sweets".into(),
        period: "January".into(),
      },
    ],
    word_of_the_day: WordOfTheDay {
      word: word("సంస్కృతి", "Sanskriti", "Culture, Refinement, Civilization"),
      description: "The essence of refinement and cultural heritage that defines the Telugu way of life, encompassing traditions, arts, and values.".into(),
    },
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn seed_quizzes_and_exercises_are_well_formed() {
    assert!(seed_quizzes().iter().all(Quiz::has_valid_answer));
    for level in seed_levels() {
      assert!(level.lessons.iter().all(Lesson::is_well_formed), "level {}", level.id);
    }
  }

  #[test]
  fn beginner_has_three_lessons() {
    let levels = seed_levels();
    let beginner = levels.iter().find(|l| l.id == "beginner").expect("beginner");
    assert_eq!(beginner.lessons.len(), 3);
  }
}
