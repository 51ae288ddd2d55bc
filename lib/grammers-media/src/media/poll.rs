// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use grammers_media_tl as tl;

#[derive(Clone, Debug, PartialEq)]
pub struct Poll {
    pub raw: tl::types::Poll,
    pub raw_results: tl::types::PollResults,
}

impl Poll {
    pub fn from_raw_media(poll: tl::types::MessageMediaPoll) -> Self {
        Self {
            raw: match poll.poll {
                tl::enums::Poll::Poll(poll) => poll,
            },
            raw_results: match poll.results {
                tl::enums::PollResults::Results(results) => results,
            },
        }
    }

    /// Return question of the poll
    pub fn question(&self) -> &str {
        match &self.raw.question {
            tl::enums::TextWithEntities::Entities(text) => text.text.as_str(),
        }
    }

    /// Return if current poll is quiz
    pub fn is_quiz(&self) -> bool {
        self.raw.quiz
    }

    /// Indicator that poll is closed
    pub fn closed(&self) -> bool {
        self.raw.closed
    }

    /// Iterator over poll answer options
    pub fn iter_answers(&self) -> impl Iterator<Item = &tl::types::PollAnswer> {
        self.raw.answers.iter().map(|answer| match answer {
            tl::enums::PollAnswer::Answer(answer) => answer,
        })
    }

    /// Total voters that took part in the vote
    ///
    /// May be None if poll isn't started
    pub fn total_voters(&self) -> Option<i32> {
        self.raw_results.total_voters
    }

    /// Return details of the voters choices:
    /// how much voters chose each answer and wether current option
    pub fn iter_voters_summary(
        &self,
    ) -> Option<impl Iterator<Item = &tl::types::PollAnswerVoters>> {
        self.raw_results.results.as_ref().map(|results| {
            results.iter().map(|result| match result {
                tl::enums::PollAnswerVoters::Voters(voters) => voters,
            })
        })
    }
}
