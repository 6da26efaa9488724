/// Usage text printed by `help`.
pub const HELP: &str = "\
Usage:

add l1 l2 ... lN
   Track the languages 'l1' to 'lN'. Names keep their case and may be at
   most 255 bytes long. Nothing is added if any name is rejected.

clear YYYY DD L
   Mark day DD of year YYYY as not started for language L.
   * YYYY is the year; both 'YYYY' and 'YY' are accepted.
   * DD is the day, from '1' to '25'.
   * L is the language name (case is ignored).

complete YYYY DD L
   Mark the given day as completed. Arguments as for 'clear'.

edit
   Enter edit mode: commands are read line by line and changes are kept in
   memory until saved. Quote a value ('...' or \"...\") to include spaces.
   Edit mode adds the following commands:
   * exit    leave edit mode without saving.
   * reload  discard changes and read the data file again.
   * save    write the data file.

file
   Print the data file name.

get [filters]
   Print a random 'year day language' combination. Filters:
   * -d, --days d1 ... dN     only the days 'd1' to 'dN' ('1' to '25').
   * -l, --langs l1 ... lN    only the languages 'l1' to 'lN' (case is ignored).
   * -y, --years y1 ... yN    only the years 'y1' to 'yN' ('YY' or 'YYYY').
   * -s, --states s1 ... sN   only the states 's1' to 'sN': 'not_yet',
                              'started' or 'completed'. Defaults to 'not_yet'.

h, help, -h, --help
   Show this message.

init
   Create the data file with one year and no languages.

random
   Alias for 'get'.

rename old new
   Rename language 'old' to 'new'. Case is ignored for 'old'.

rm l1 l2 ... lN
   Stop tracking the languages 'l1' to 'lN' (case is ignored).

show [filters]
   Print the progress table. Accepts the '-d', '-l' and '-y' filters of 'get'.

start YYYY DD L
   Mark the given day as started. Arguments as for 'clear'.

year add | year rm
   Track one more year, or drop the most recent one.";
