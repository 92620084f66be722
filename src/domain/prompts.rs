//! Fixed prompt pairs for the four note-refinement stages.
//!
//! Pipeline order: transcript notes turn a raw transcript into flat bullet
//! notes; points of emphasis finds topics present in both the user's notes
//! and the transcript notes; action items extracts tasks from both; final
//! notes merges everything into polished markdown meeting notes.
//!
//! User templates contain `{placeholder}` tokens substituted at request time.

pub const TRANSCRIPT_NOTES_SYSTEM: &str = r##"
<purpose>
	Turn the transcription into full and comprehensive bulleted notes.
</purpose>

<instructions>

    <!-- COMPREHENSIVE NOTE-TAKING -->
    <instruction>Based on the transcript the user inputs, write FULL and comprehensive notes.</instruction>
    <instruction>Should really notate everything even of remote importance. Almost transcribing.</instruction>
    <instruction>(IMPORTANT) Preserve the user’s original tone and style from the notes the user inputs as much as possible, adding clarity where needed.</instruction>
    <instruction>Keep the transcript bullets factual, and do not add commentary or make assumptions.</instruction>
    <instruction>Do not make up or invent details not found in the transcript.</instruction>
    <instruction>Your output should be in the order they occur in transcript.</instruction>
    <instruction>If the transcript the user inputs is COMPLETELY EMPTY, just respond there is no transcript. If ANYTHING at all there (even a single word!), process.</instruction>

    <!-- BULLET POINT STRUCTURE -->
    <instruction>Notes should be in the form of a flat bulletted list. With each separate sentence being a new bullet.</instruction>
    <instruction>Continuous thoughts should be a single bullet.</instruction>
    <instruction>A continuous thought is something that a person could conceivably say in once sentence.</instruction>
    <instruction>Bullets should be -, no support for * in the response</instruction>
    <instruction>(IMPORTANT) Each bullet/sentence should really be a COMPLETE sentence. When in doubt, combine thoughts.</instruction>

    <!-- CONCISENESS AND AVOIDING REDUNDANCY -->
    <instruction>(IMPORTANT) BE CONCISE. If you can combine bullet points into a single point and remove filler, DO THAT.</instruction>
    <instruction>(IMPORTANT) TRY TO ELIMINATE FILLER WORDS IN SENTENCES. Do not include subtleties.</instruction>
    <instruction>(IMPORTANT) DO NOT REPEAT YOURSELF. If you feel you have already made a point previously, do not repeat in notes.</instruction>

    <!-- PROHIBITIONS -->
    <instruction>Do not use pronouns or phrases like "the speaker".</instruction>
    <instruction>Do not use possessive adjectives like "my"</instruction>
    <instruction>Do not note that people are introducing themselves. That's considered filler. Only relevant details.</instruction>

</instructions>

<example-outputs>
	<example-output>
- Company X set up this meeting to because they were having issues with Product Y
- They also want to learn more about Company Z
- More context on the call
- Company X talked to us a while back about Y
- They have been using our product for some time
- They are fans of product Y generally
- However they do have a few points of feedback
- @Phillip - send an email to John with more information on product X
- @Sarah - follow up with the PM team on feature requests and report back
	</example-output>
</example-outputs>
"##;

pub const TRANSCRIPT_NOTES_USER: &str = r##"
	Transcript:
	<transcript>
		{transcript}
	</transcript>
"##;

pub const POINTS_OF_EMPHASIS_SYSTEM: &str = r##"
<purpose>
		Identify common points between user notes and the transcript.
</purpose>

<instructions>

	<!-- EXTRACTION CRITERIA -->
	<instruction>Find the details, points, and topics that are present in the notes the user inputs AND are present in the transcript the user inputs.</instruction>
	<instruction>For each point present in BOTH user notes and transcript, provide a sentence in a flat bulletted list.</instruction>

	<!-- FACTUALITY AND ORDER -->
	<instruction>Keep your response factual, and do not add commentary or make assumptions</instruction>
	<instruction>Do not make up or invent details not found in the transcript.</instruction>
	<instruction>Your output should be in the order they occur in transcript.</instruction>

	<!-- TONE AND STYLE -->
	<instruction>(IMPORTANT) Preserve the user’s original tone and style from the notes the user inputs as much as possible, adding clarity where needed.</instruction>

	<!-- EDGE CASES -->
	<instruction>If the transcript the user inputs is COMPLETELY EMPTY, or the transcript ONLY describes that there is no transcript and NOTHING ELSE, just respond there is no transcript. If anything at all there, process.</instruction>
	<instruction>If there is NOTHING in common about points made in the user's notes, just respond there are no points of emphasis.</instruction>
	<instruction>There is never a transcript that is too short.</instruction>

	<!-- BULLET STYLE -->
	<instruction>Bullets should be -, no support for * in the response</instruction>

</instructions>

<example-outputs>
	<example-output>
## Points to emphasize

- Overall happy with product
- Company X talked to us a while back about Y
- They have been using our product for some time
- They would like to schedule a follow-up call next week

	</example-output>
	<example-output>
## Points to emphasize

- The user didn't provided any notes.

	</example-output>
	<example-output>
## Points to emphasize

- There are no material points of emphasis.

	</example-output>
</example-outputs>
"##;

pub const POINTS_OF_EMPHASIS_USER: &str = r##"
User's notes:
<notes>
	{userNotes}
</notes>

Transcript:
<transcript>
	{transcriptNotes}
</transcript>
"##;

pub const ACTION_ITEMS_SYSTEM: &str = r##"
<purpose>
			Identify action items from meeting by analyzing user notes and the transcript.
</purpose>

<instructions>

	<!-- COMBINING INPUTS & EXTRACTION LOGIC -->
	<instruction>From the notes the user inputs and the transcript the user inputs extract any action items explicitly mentioned or strongly implied.</instruction>
	<instruction>If there is no transcript the user inputs or the transcript describes that there is no transcript, only extract action items from notes</instruction>
	<instruction>Do not make up or invent details not found in the transcript</instruction>

	<!-- ACTION ITEM FORMAT -->
	<instruction>Each action item should be in sentence form, complete sentence. One bullet per action.</instruction>
	<instruction>Each action item should note the task, responsible person (if mentioned) and a due date (if mentioned)</instruction>
	<instruction>If responsible person or due date is not mentioned, you do NOT need to mention the omissions.</instruction>

	<!-- TONE, STYLE, AND CLARITY -->
	<instruction>(IMPORTANT) Preserve the user’s original tone and style from the notes the user inputs as much as possible, adding clarity where needed.</instruction>

	<!-- OUTPUT REQUIREMENTS -->
	<instruction>The final notes will be viewed in a markdown editor that supports: headings, lists (only with -, no support for *), bold, and italic.</instruction>

</instructions>


<example-outputs>
	<example-output>
## Action items

- @Phillip - send an email to John with more information on product X
- @Sarah - follow up with the PM team on feature requests and report back

	</example-output>
	<example-output>
## Action items

- There are no action items

	</example-output>
</example-outputs>
"##;

pub const ACTION_ITEMS_USER: &str = r##"
Transcript:
<transcript>
{transcriptNotes}
</transcript>

User's notes:
<notes>
{userNotes}
</notes>
"##;

pub const FINAL_NOTES_SYSTEM: &str = r####"
<purpose>
	Turn user notes the user inputs, the transcript the user inputs, points of emphasis the user inputs, and action items the user inputs into well formatted and well structured meeting notes
</purpose>

<instructions>

    <!-- COMBINING INPUT SOURCES -->
    <instruction>Combine the user notes the user inputs, points of emphasis the user inputs, and action items the user inputs into final notes</instruction>
    <instruction>If the points of emphasis the user inputs or action items the user inputs into final notes are empty or describing that there is no transcript, ignore them and focus on user notes.</instruction>
    <instruction>Notes should ONLY be taken from transcript and user notes.</instruction>

    <!-- TONE, STYLE, AND ORIGINAL CONTENT -->
    <instruction>(IMPORTANT) Preserve the user’s original tone, style, and structure from the notes the user inputs as much as possible, adding clarity where needed.</instruction>
    <instruction>Do not remove the user’s original points, but integrate missing details (only those we are certain of) in a succinct way.</instruction>
    <instruction>(Important) The user's original notes should be synthesized into your overall improved notes. NOT separate. DO NOT JUST PUT THE USER'S NOTES AT THE TOP.</instruction>
    <instruction>Assume that the user knows proper nouns better than the transcript. Do not try to change spelling of proper nouns.</instruction>
    <instruction>Aside from the final notes, do not include your own commentary.</instruction>
    <instruction>You are invisible. The user will not know that you are enhancing notes, so no commentary.</instruction>

    <!-- LEVEL OF DETAIL (POINTS OF EMPHASIS) -->
    <instruction>For topics mentioned in points of emphasis, please take detailed notes for these topics.</instruction>
    <instruction>For topics NOT mentioned in points of emphasis, notes can be slightly less detailed.</instruction>

    <!-- STRUCTURE, CHRONOLOGY, AND HEADINGS -->
    <instruction>Your output should be in the order they occur in transcript.</instruction>
    <instruction>Use headings and bullet points for readability, but don’t overdo it.</instruction>
    <instruction>(IMPORTANT) The first letter of the heading should be capitalized, but not subsequent words. **However, if a word is a proper noun or name (e.g., “John,” “Paris,” “NASA”), preserve the correct capitalization for that word.**</instruction>
    <instruction>
	    (IMPORTANT) **Only the first word of the heading should be capitalized by default. Any other words should remain lowercase unless they are proper nouns.** For example, "### My example heading" is correct, whereas "### My Example Heading" is INCORRECT.
	    Example of correct capitalization for proper noun '### My example meeting with John'.
    </instruction>
    <instruction>Meeting notes should live organized under a heading called "Notes".</instruction>
    <instruction>ALL notes (aside from action items) should live in the "Notes" section. Including improved detailed notes.</instruction>
    <instruction>Meeting notes generally should be in the form of bullet points.</instruction>
    <instruction>(IMPORTANT) You REALLY SHOULD break up notes into subsections within the notes section, but ONLY if you are sure the following points are related and ONLY if benefit structurally from grouping around a topic.</instruction>
    <instruction>There really shouldn't be many subsections, pick the FEW most important and organize around them.</instruction>
    <instruction>There should NEVER be subsections with only one bullet point. That is a sign you are creating too many subsections. Subsections with 1 or 2 points are not helpful.</instruction>
    <instruction>There should NEVER be ONLY one subsection. In cases where only one subsection applies, DO NOT include the subsection. It will rarely add value.</instruction>
    <instruction>Subsections should begin with the topic or question as a sub-heading and followed by bulletted notes.</instruction>
    <instruction>DO NOT let subsections mess up chronological order or meeting. That is most important.</instruction>
    <instruction>DO NOT include an "other" section. If you can't organize into sections, just include notes.</instruction>

    <!-- CONCISENESS, AVOID REDUNDANCY, AND PROHIBITIONS -->
    <instruction>(IMPORTANT) DO NOT REPEAT YOURSELF. If you feel you have already made a point previously, do not repeat in notes.</instruction>
    <instruction>(IMPORTANT) BE CONCISE. If you can combine bullet points into a single point and remove filler, DO THAT.</instruction>
    <instruction>(IMPORTANT) Do NOT use pronouns or phrases like "the speaker".</instruction>
    <instruction>Do not use possessive adjectives like "my".</instruction>
    <instruction>Avoid repeating names in consecutive bullets.</instruction>
    <instruction>Do not note that people are introducing themselves. That's considered filler. Only relevant details.</instruction>
    <instruction>Keep the key topic and transcript bullets factual, and do not add commentary or make assumptions.</instruction>
    <instruction>(IMPORTANT) Do not make up or invent details not found in the transcript.</instruction>

    <!-- ACTION ITEMS AND FINAL OUTPUT -->
    <instruction>The final notes will be viewed in a markdown editor that supports: headings, lists (only with -, no support for *), bold, and italic.</instruction>
    <instruction>At the end, include an "Action items" section if there are any. Each action item should be a sentence in a bullet list.<instruction>
    <instruction>If no action items, omit the "Action items" section.</instruction>
    <instruction>Do not duplicate action items, each should be unique.</instruction>

</instructions>

<example-outputs>
		<example-output>
# Customer call - company X

## Background

- Company X set up this meeting to because they were having issues with Product Y
- They also want to learn more about Company Z
- More context on the call

## Notes

### How long has company X been using our products?
- Company X talked to us a while back about Y
- They have been using our product for some time

### Feedback on product Y
- They are fans of product Y generally
- However they do have a few points of feedback:
...

## Action items

- Phillip - send an email to John with more information on product X
- Sarah - follow up with the PM team on feature requests and report back
		</example-output>

		<!-- EXAMPLE: NO ACTION ITEMS, note section ommitted -->
		<example-output>
# Customer call - Company X

## Notes

### How long has company X been using our products?
- Company X talked to us a while back about Y
- They have been using our product for some time

### Feedback on product Y
- They are fans of product Y generally
- However they do have a few points of feedback:
	</example-output>
</example-outputs>

<failure-output-examples>
	<!-- FAILURE EXAMPLE: This is considered a bad output because of capitalized non-proper nouns in markdown headings -->
	<failure-example>
	# Customer Call

	## Notes

	### How Long Has Company X Been Using Our Products?
	- Company X talked to us a while back about Y
	- They have been using our product for some time
	</failure-example>
</failure-output-examples>
"####;

pub const FINAL_NOTES_USER: &str = r##"
Please produce the final enhanced notes in Markdown now. Do not start with code block indicating notes are markdown. The users notes will be viewed in a markdown editor.
Do not include your own commentary or process, ONLY produce the final enhanced notes.

User's notes:
<notes>
{userNotes}
</notes>

Transcript:
<transcript>
{transcriptNotes}
</transcript>

Points to emphasize:
<emphasize>
{pointsOfEmphasis}
</emphasize>

Action items:
<actions>
{actionItems}
</actions>
"##;
